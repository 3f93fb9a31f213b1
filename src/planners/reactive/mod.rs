//! Mode-switching agent: flee when a pursuer is close, otherwise forage for
//! food or tour the corners.

mod exploration;
mod foraging;
mod mode;
mod survival;

pub use exploration::{DEFAULT_STUCK_PATIENCE, ExplorationPolicy};
pub use foraging::ForagingPolicy;
pub use mode::{DEFAULT_SURVIVAL_THRESHOLD, ModeSelector, select_mode};
pub use survival::SurvivalPolicy;

use rand::Rng;
use tracing::warn;

use crate::infra::Action;
use crate::planners::Agent;
use crate::state::{AgentState, GridQuery, Mode};

/// Behaviour used while no pursuer is within the survival threshold.
#[derive(Debug, Clone)]
pub enum Pursuit {
    Forage(ForagingPolicy),
    Explore(ExplorationPolicy),
}

pub struct ReactiveAgent<R: Rng> {
    selector: ModeSelector,
    survival: SurvivalPolicy,
    pursuit: Pursuit,
    state: AgentState,
    rng: R,
}

impl<R: Rng> ReactiveAgent<R> {
    pub fn new(selector: ModeSelector, pursuit: Pursuit, rng: R) -> Self {
        Self {
            selector,
            survival: SurvivalPolicy,
            pursuit,
            state: AgentState::new(),
            rng,
        }
    }

    pub fn foraging(threshold: i32, rng: R) -> Self {
        Self::new(ModeSelector::new(threshold), Pursuit::Forage(ForagingPolicy), rng)
    }

    pub fn exploring(threshold: i32, patience: u32, rng: R) -> Self {
        Self::new(
            ModeSelector::new(threshold),
            Pursuit::Explore(ExplorationPolicy::new(patience)),
            rng,
        )
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }
}

impl<R: Rng> Agent for ReactiveAgent<R> {
    fn name(&self) -> &'static str {
        match self.pursuit {
            Pursuit::Forage(_) => "reactive-forage",
            Pursuit::Explore(_) => "reactive-explore",
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(agent = self.name()))]
    fn get_action(&mut self, grid: &dyn GridQuery) -> Action {
        let position = grid.current_position();
        let pursuers = grid.pursuer_positions();
        let mode = self.selector.select(position, pursuers);

        // Survival moves leave the cached path without a valid origin.
        if self.state.switch_mode(mode) == Some(Mode::Survival) {
            self.state.cached_path.clear();
        }

        let result = match mode {
            Mode::Survival => {
                self.state.last_position = Some(position);
                self.survival
                    .choose_move(position, &grid.legal_actions(), pursuers)
            }
            Mode::Foraging => match &mut self.pursuit {
                Pursuit::Forage(policy) => policy.choose_move(&mut self.state, grid, &mut self.rng),
                Pursuit::Explore(policy) => {
                    policy.choose_move(&mut self.state, grid, &mut self.rng)
                }
            },
        };

        result.unwrap_or_else(|err| {
            warn!("{}, stopping", err);
            Action::Stop
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::infra::Position;
    use crate::state::{GridSnapshot, WallSet};

    #[test]
    fn test_flees_when_pursuer_close() {
        let grid = GridSnapshot::new(WallSet::new(7, 7), Position::new(3, 3))
            .with_food([Position::new(6, 3)])
            .with_pursuers([Position::new(5, 3)]);
        let mut agent = ReactiveAgent::foraging(3, StdRng::seed_from_u64(1));

        // North, South and West all end 3 away; North comes first in legal order
        let action = agent.get_action(&grid);
        assert_eq!(action, Action::North);
        assert_eq!(agent.state().mode, Mode::Survival);
    }

    #[test]
    fn test_forages_when_pursuers_far() {
        let grid = GridSnapshot::new(WallSet::new(9, 9), Position::new(0, 0))
            .with_food([Position::new(0, 2)])
            .with_pursuers([Position::new(8, 8)]);
        let mut agent = ReactiveAgent::foraging(3, StdRng::seed_from_u64(1));

        assert_eq!(agent.get_action(&grid), Action::South);
        assert_eq!(agent.state().mode, Mode::Foraging);
        assert_eq!(agent.state().current_goal, Some(Position::new(0, 2)));
    }

    #[test]
    fn test_returning_from_survival_recomputes_path() {
        let mut grid = GridSnapshot::new(WallSet::new(9, 9), Position::new(0, 0))
            .with_food([Position::new(0, 4)])
            .with_pursuers([Position::new(8, 8)]);
        let mut agent = ReactiveAgent::foraging(3, StdRng::seed_from_u64(1));

        agent.get_action(&grid);
        assert_eq!(agent.state().cached_path.len(), 3);

        grid.pursuers = vec![Position::new(0, 2)];
        agent.get_action(&grid);
        assert_eq!(agent.state().mode, Mode::Survival);

        grid.position = Position::new(4, 0);
        grid.pursuers = vec![Position::new(8, 8)];
        let action = agent.get_action(&grid);
        assert_eq!(agent.state().mode, Mode::Foraging);
        assert_eq!(agent.state().current_goal, Some(Position::new(0, 4)));
        assert_eq!(agent.state().cached_path.len(), 7);
        assert_eq!(action, Action::South);
    }

    #[test]
    fn test_survival_turns_track_position() {
        let mut grid = GridSnapshot::new(WallSet::new(9, 9), Position::new(4, 4))
            .with_pursuers([Position::new(4, 6)]);
        let mut agent = ReactiveAgent::exploring(3, 5, StdRng::seed_from_u64(1));

        agent.get_action(&grid);
        assert_eq!(agent.state().mode, Mode::Survival);
        assert_eq!(agent.state().last_position, Some(Position::new(4, 4)));

        // Still standing on the cell the flee turn started from
        grid.pursuers = vec![Position::new(8, 8)];
        agent.get_action(&grid);
        assert_eq!(agent.state().mode, Mode::Foraging);
        assert_eq!(agent.state().stuck_counter, 1);
    }

    #[test]
    fn test_no_legal_move_stops() {
        let grid = GridSnapshot::new(WallSet::new(5, 5), Position::new(2, 2))
            .with_pursuers([Position::new(2, 3)])
            .with_legal(Vec::new());
        let mut agent = ReactiveAgent::exploring(3, 5, StdRng::seed_from_u64(1));
        assert_eq!(agent.get_action(&grid), Action::Stop);
    }

    #[test]
    fn test_explorer_heads_for_corner() {
        let grid = GridSnapshot::new(WallSet::new(5, 5), Position::new(1, 0));
        let mut agent = ReactiveAgent::exploring(3, 5, StdRng::seed_from_u64(1));

        assert_eq!(agent.get_action(&grid), Action::West);
        assert_eq!(agent.state().current_goal, Some(Position::new(0, 0)));
        assert_eq!(agent.name(), "reactive-explore");
    }
}
