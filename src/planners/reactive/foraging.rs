use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::infra::{Action, AgentError, PathFinder, Position};
use crate::planners::random_legal;
use crate::state::{AgentState, GridQuery};

/// Walks towards the nearest food item along a cached shortest path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForagingPolicy;

impl ForagingPolicy {
    /// The cached goal if it still holds food, `StaleGoal` once it was eaten.
    pub fn validate_goal(
        goal: Option<Position>,
        food: &HashSet<Position>,
    ) -> Result<Option<Position>, AgentError> {
        match goal {
            Some(goal) if !food.contains(&goal) => Err(AgentError::StaleGoal(goal)),
            goal => Ok(goal),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        state: &mut AgentState,
        grid: &dyn GridQuery,
        rng: &mut R,
    ) -> Result<Action, AgentError> {
        let position = grid.current_position();
        let food = grid.food_positions();
        let legal = grid.legal_actions();

        let kept = match Self::validate_goal(state.current_goal, food) {
            Ok(goal) => goal,
            Err(err) => {
                debug!("{}, selecting new food target", err);
                None
            }
        };
        let goal = match kept {
            Some(goal) => goal,
            None => {
                state.clear_goal();
                let Some(target) = position.nearest(food) else {
                    debug!("No food left, moving randomly");
                    return random_legal(rng, &legal);
                };
                debug!("New food target {} at distance {}", target, position.distance(&target));
                state.current_goal = Some(target);
                target
            }
        };

        if state.cached_path.is_empty() {
            match PathFinder::route(position, goal, grid.walls()) {
                Ok(path) => {
                    debug!("Path to {} has {} steps", goal, path.len());
                    state.cached_path = path;
                }
                // Goal is kept.
                Err(err) => debug!("{}, moving randomly", err),
            }
        }

        if let Some(action) = state.next_step() {
            if legal.contains(&action) {
                return Ok(action);
            }
            debug!("Cached step {} is not legal from {}, dropping path", action, position);
            state.cached_path.clear();
        }

        random_legal(rng, &legal)
    }
}
