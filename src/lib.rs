pub mod config;
pub mod infra;
pub mod planners;
pub mod sim;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AgentConfig;
pub use infra::{Action, AgentError, PathFinder, PathOutcome, Position};
pub use planners::{Agent, AgentKind};
pub use state::{AgentState, GridQuery, Mode, WallSet};
