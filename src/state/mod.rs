mod agent_state;
mod grid;
mod map;

pub use agent_state::{AgentState, Mode};
pub use grid::{GridQuery, GridSnapshot, legal_actions_at};
pub use map::WallSet;
