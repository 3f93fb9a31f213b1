use crate::infra::Action;
use crate::planners::Agent;
use crate::state::GridQuery;

/// Turns left at every opportunity, otherwise keeps heading, turns right,
/// or reverses.
pub struct LeftTurnAgent;

impl Agent for LeftTurnAgent {
    fn name(&self) -> &'static str {
        "left-turn"
    }

    fn get_action(&mut self, grid: &dyn GridQuery) -> Action {
        let legal = grid.legal_actions();
        let current = match grid.current_direction() {
            Action::Stop => Action::North,
            heading => heading,
        };

        [current.left(), current, current.right(), current.reverse()]
            .into_iter()
            .find(|action| legal.contains(action))
            .unwrap_or(Action::Stop)
    }
}
