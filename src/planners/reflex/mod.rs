//! Single-rule agents that look no further than the next move.

pub mod evaluation;
mod go_west;
mod greedy;
mod hungry;
mod left_turn;

pub use evaluation::{EvaluationFn, EvaluationRegistry, Successor};
pub use go_west::GoWestAgent;
pub use greedy::GreedyAgent;
pub use hungry::HungryAgent;
pub use left_turn::LeftTurnAgent;

use tracing::warn;

use crate::infra::Action;
use crate::planners::Agent;
use crate::planners::reactive::SurvivalPolicy;
use crate::state::GridQuery;

/// Always flees, regardless of how far away the pursuers are.
pub struct SurvivalAgent;

impl Agent for SurvivalAgent {
    fn name(&self) -> &'static str {
        "survival"
    }

    fn get_action(&mut self, grid: &dyn GridQuery) -> Action {
        SurvivalPolicy
            .choose_move(grid.current_position(), &grid.legal_actions(), grid.pursuer_positions())
            .unwrap_or_else(|err| {
                warn!("{}, stopping", err);
                Action::Stop
            })
    }
}
