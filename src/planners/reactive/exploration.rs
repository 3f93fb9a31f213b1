use rand::Rng;
use tracing::{debug, warn};

use crate::infra::{Action, AgentError, PathFinder, Position};
use crate::planners::random_legal;
use crate::state::{AgentState, GridQuery};

pub const DEFAULT_STUCK_PATIENCE: u32 = 5;

/// Tours the grid corners, rotating to a fresh corner on arrival or when the
/// agent has not moved for more than `patience` turns.
#[derive(Debug, Clone)]
pub struct ExplorationPolicy {
    patience: u32,
    corners: Option<Vec<Position>>,
}

impl ExplorationPolicy {
    pub fn new(patience: u32) -> Self {
        Self {
            patience,
            corners: None,
        }
    }

    /// Capture the static corner set; only the first call queries the grid.
    pub fn capture_corners(&mut self, grid: &dyn GridQuery) -> &[Position] {
        self.corners.get_or_insert_with(|| grid.corner_positions())
    }

    /// Pick the nearest corner not yet visited in this rotation and reset the
    /// cached path. Starts a new rotation once every corner has been used.
    pub fn select_goal(&self, state: &mut AgentState, position: Position) -> Option<Position> {
        let corners = self.corners.as_deref().unwrap_or_default();
        state.cached_path.clear();

        let mut unvisited: Vec<&Position> = corners
            .iter()
            .filter(|corner| !state.visited_goals.contains(*corner))
            .collect();
        if unvisited.is_empty() {
            debug!("All {} corners visited, starting a new rotation", corners.len());
            state.visited_goals.clear();
            unvisited = corners.iter().collect();
        }

        let goal = position.nearest(unvisited);
        if let Some(goal) = goal {
            debug!("New corner goal {} at distance {}", goal, position.distance(&goal));
            state.visited_goals.insert(goal);
        }
        state.current_goal = goal;
        goal
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn choose_move<R: Rng + ?Sized>(
        &mut self,
        state: &mut AgentState,
        grid: &dyn GridQuery,
        rng: &mut R,
    ) -> Result<Action, AgentError> {
        let position = grid.current_position();
        let corner_count = self.capture_corners(grid).len();

        let stuck = state.track_progress(position);
        if stuck > self.patience {
            warn!("No progress for {} turns at {}, rotating goal", stuck, position);
            state.stuck_counter = 0;
            self.select_goal(state, position);
        } else if state.current_goal.is_none_or(|goal| goal == position) {
            self.select_goal(state, position);
        }

        // A corner the agent already stands on is skipped rather than targeted.
        for _ in 0..corner_count {
            if state.current_goal != Some(position) {
                break;
            }
            self.select_goal(state, position);
        }

        // Sealed-off corners are skipped, at most one full rotation per turn.
        if state.cached_path.is_empty() {
            for _ in 0..corner_count {
                let Some(goal) = state.current_goal else {
                    break;
                };
                match PathFinder::route(position, goal, grid.walls()) {
                    Ok(path) => {
                        state.cached_path = path;
                        break;
                    }
                    Err(err) => {
                        debug!("{}, selecting another corner", err);
                        self.select_goal(state, position);
                    }
                }
            }
        }

        let legal = grid.legal_actions();
        let result = match state.next_step() {
            Some(action) if legal.contains(&action) => Ok(action),
            Some(action) => {
                debug!("Cached step {} is not legal from {}, dropping path", action, position);
                state.cached_path.clear();
                random_legal(rng, &legal)
            }
            None => random_legal(rng, &legal),
        };

        state.last_position = Some(position);
        result
    }
}

impl Default for ExplorationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_STUCK_PATIENCE)
    }
}
