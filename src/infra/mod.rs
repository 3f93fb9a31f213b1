mod default_observer;
mod error;
mod game_observer;
mod pathfinding;
mod types;

pub use default_observer::DefaultObserver;
pub use error::AgentError;
pub use game_observer::GameObserver;
pub use pathfinding::{PathFinder, PathOutcome};
pub use types::{Action, Position};

use tracing::warn;

// ============================================================================
// Helper functions
// ============================================================================

/// Pass-through check at the engine boundary. A legal action is returned
/// unchanged; anything else becomes `Stop`, or the first legal action when
/// `Stop` is not allowed either.
pub fn validate_move(action: Action, legal: &[Action]) -> Action {
    if legal.contains(&action) {
        return action;
    }
    let replacement = if legal.contains(&Action::Stop) {
        Action::Stop
    } else {
        legal.first().copied().unwrap_or(Action::Stop)
    };
    warn!("Illegal action {} replaced by {}", action, replacement);
    replacement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_move() {
        let legal = [Action::North, Action::Stop];
        assert_eq!(validate_move(Action::North, &legal), Action::North);
        assert_eq!(validate_move(Action::East, &legal), Action::Stop);
        assert_eq!(validate_move(Action::East, &[Action::West, Action::South]), Action::West);
        assert_eq!(validate_move(Action::East, &[]), Action::Stop);
    }
}
