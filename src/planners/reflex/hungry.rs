use tracing::debug;

use crate::infra::Action;
use crate::planners::Agent;
use crate::state::GridQuery;

/// Steps towards the nearest food by straight-line Manhattan distance,
/// ignoring walls beyond the legal move set.
pub struct HungryAgent;

impl Agent for HungryAgent {
    fn name(&self) -> &'static str {
        "hungry"
    }

    fn get_action(&mut self, grid: &dyn GridQuery) -> Action {
        let position = grid.current_position();
        let Some(target) = position.nearest(grid.food_positions()) else {
            debug!("No food left, stopping");
            return Action::Stop;
        };

        grid.legal_actions()
            .into_iter()
            .min_by_key(|action| action.apply(position).distance(&target))
            .unwrap_or(Action::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Position;
    use crate::state::{GridSnapshot, WallSet};

    #[test]
    fn test_steps_towards_nearest_food() {
        let grid = GridSnapshot::new(WallSet::new(5, 5), Position::new(2, 2))
            .with_food([Position::new(0, 2), Position::new(4, 4)]);
        assert_eq!(HungryAgent.get_action(&grid), Action::West);
    }

    #[test]
    fn test_stops_without_food() {
        let grid = GridSnapshot::new(WallSet::new(5, 5), Position::new(2, 2));
        assert_eq!(HungryAgent.get_action(&grid), Action::Stop);
    }

    #[test]
    fn test_blocked_direction_is_skipped() {
        let mut walls = WallSet::new(5, 5);
        walls.insert(Position::new(1, 2));
        let grid = GridSnapshot::new(walls, Position::new(2, 2)).with_food([Position::new(0, 2)]);
        // Every legal move ends further from the food than staying put
        assert_eq!(HungryAgent.get_action(&grid), Action::Stop);
    }
}
