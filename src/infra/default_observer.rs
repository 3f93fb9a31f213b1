use tracing::{debug, info};

use crate::infra::{Action, GameObserver};
use crate::sim::{GameSummary, GridWorld};
use crate::state::GridQuery;

pub struct DefaultObserver;

impl GameObserver for DefaultObserver {
    fn on_game_start(&mut self, game_index: u32, agent_name: &str, world: &GridWorld) {
        info!("Game {} started with agent {}", game_index, agent_name);
        info!("- map size: {}x{}", world.walls().width, world.walls().height);
        info!("- food: {}", world.food_remaining());
        info!("- pursuers: {}", world.pursuer_positions().len());
    }

    fn on_state_update(&mut self, world: &GridWorld) {
        debug!(
            "turn: {}, pos: {}, score: {}, food left: {}",
            world.turn(),
            world.current_position(),
            world.score(),
            world.food_remaining(),
        );
        debug!("\n{}", world.draw_ascii_map());
    }

    fn on_action_selected(&mut self, action: Action, _world: &GridWorld) {
        debug!("action: {}", action.as_str_name());
    }

    fn on_game_finished(&mut self, summary: &GameSummary) {
        info!("Game finished with status: {:?}", summary.status);
        info!("Final turn: {}, score: {}", summary.turns, summary.score);
    }
}
