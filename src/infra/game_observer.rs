use crate::infra::Action;
use crate::sim::{GameSummary, GridWorld};

/// Trait for observing game events during execution
pub trait GameObserver {
    /// Called when the game starts
    fn on_game_start(&mut self, game_index: u32, agent_name: &str, world: &GridWorld);

    /// Called before the agent decides, once per turn
    fn on_state_update(&mut self, world: &GridWorld);

    /// Called when an action is selected
    fn on_action_selected(&mut self, action: Action, world: &GridWorld);

    /// Called when the game finishes
    fn on_game_finished(&mut self, summary: &GameSummary);
}
