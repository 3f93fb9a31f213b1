//! In-process grid engine used to drive agents outside a real game server.

mod game;
mod layout;
mod world;

pub use game::{Game, GameSummary};
pub use layout::{DEFAULT_LAYOUT, Layout};
pub use world::{GameStatus, GridWorld, WIN_REWARD};
