use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::infra::{Action, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Foraging,
    Survival,
}

/// Per-agent memory that survives between turns of one game.
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    pub mode: Mode,
    pub current_goal: Option<Position>,
    /// Moves leading from the current position to `current_goal`, consumed
    /// front first.
    pub cached_path: VecDeque<Action>,
    pub visited_goals: HashSet<Position>,
    pub last_position: Option<Position>,
    pub stuck_counter: u32,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_goal(&mut self) {
        self.current_goal = None;
        self.cached_path.clear();
    }

    pub fn next_step(&mut self) -> Option<Action> {
        self.cached_path.pop_front()
    }

    /// Record a mode for this turn. Returns the previous mode when it changed.
    pub fn switch_mode(&mut self, mode: Mode) -> Option<Mode> {
        if self.mode == mode {
            return None;
        }
        debug!("Mode changed {:?} -> {:?}", self.mode, mode);
        let previous = self.mode;
        self.mode = mode;
        Some(previous)
    }

    /// Bump or reset the stuck counter against the last recorded position.
    pub fn track_progress(&mut self, position: Position) -> u32 {
        if self.last_position == Some(position) {
            self.stuck_counter += 1;
        } else {
            self.stuck_counter = 0;
        }
        self.stuck_counter
    }
}
