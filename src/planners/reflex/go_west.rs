use crate::infra::Action;
use crate::planners::Agent;
use crate::state::GridQuery;

const PREFERENCE: [Action; 4] = [Action::West, Action::North, Action::South, Action::East];

/// West whenever possible, then North, South, East.
pub struct GoWestAgent;

impl Agent for GoWestAgent {
    fn name(&self) -> &'static str {
        "go-west"
    }

    fn get_action(&mut self, grid: &dyn GridQuery) -> Action {
        let legal = grid.legal_actions();
        PREFERENCE
            .into_iter()
            .find(|action| legal.contains(action))
            .unwrap_or(Action::Stop)
    }
}
