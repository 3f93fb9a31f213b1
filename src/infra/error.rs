//! Error types raised while deciding moves or building agents.

use thiserror::Error;

use crate::infra::Position;

/// Errors surfaced by policies, registries and the layout loader.
///
/// Policies recover from the move-level variants locally and always hand an
/// action back to the engine; only construction-time failures reach `main`.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no legal move available")]
    NoLegalMove,

    #[error("goal {goal} is unreachable from {from}")]
    UnreachableGoal { from: Position, goal: Position },

    #[error("goal {0} is no longer valid")]
    StaleGoal(Position),

    #[error("unknown evaluation function: {0}")]
    UnknownEvaluation(String),

    #[error("unknown agent kind: {0}")]
    UnknownAgent(String),

    #[error("invalid layout at line {line}: {reason}")]
    InvalidLayout { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
