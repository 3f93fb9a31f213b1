use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::Rng;
use time::{OffsetDateTime, format_description};
use tracing::warn;

use crate::infra::{AgentError, GameObserver};
use crate::planners::Agent;
use crate::sim::{GameStatus, GridWorld, Layout};
use crate::state::GridQuery;

#[derive(Debug, Clone)]
pub struct GameSummary {
    pub game_index: u32,
    pub agent: String,
    pub status: GameStatus,
    pub score: i32,
    pub turns: u32,
    pub food_remaining: usize,
}

impl GameSummary {
    /// Write a plain-text summary into `folder`, named after the agent and
    /// the local start time.
    pub fn write_to(&self, folder: &Path) -> Result<PathBuf, AgentError> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let format = format_description::parse("[year][month][day]-[hour][minute][second]")
            .map_err(std::io::Error::other)?;
        let date_time_str = now.format(&format).map_err(std::io::Error::other)?;

        let filename = folder.join(format!(
            "{} - {} - game{}.txt",
            self.agent, date_time_str, self.game_index
        ));
        if !folder.exists() {
            fs::create_dir_all(folder)?;
        }

        let contents = format!(
            "agent: {}\nstatus: {:?}\nscore: {}\nturns: {}\nfood_remaining: {}\n",
            self.agent, self.status, self.score, self.turns, self.food_remaining
        );
        fs::write(&filename, contents)?;
        Ok(filename)
    }
}

pub struct Game<R: Rng> {
    layout: Layout,
    observer: Box<dyn GameObserver>,
    rng: R,
    max_turns: u32,
}

impl<R: Rng> Game<R> {
    pub fn new(layout: Layout, observer: impl GameObserver + 'static, rng: R, max_turns: u32) -> Self {
        Self {
            layout,
            observer: Box::new(observer),
            rng,
            max_turns,
        }
    }

    pub fn run(&mut self, game_index: u32, agent: &mut dyn Agent) -> GameSummary {
        let mut world = GridWorld::new(&self.layout);
        self.observer.on_game_start(game_index, agent.name(), &world);

        while !world.status().is_finished() {
            if world.turn() >= self.max_turns {
                world.end_turn_limit();
                break;
            }
            let tick_start = Instant::now();

            self.observer.on_state_update(&world);
            let action = agent.get_action(&world);
            self.observer.on_action_selected(action, &world);
            world.step(action, &mut self.rng);

            let tick_duration = tick_start.elapsed();
            if tick_duration.as_millis() > 100 {
                warn!(
                    "Turn {} took {:.2}ms (action: {})",
                    world.turn(),
                    tick_duration.as_secs_f64() * 1000.0,
                    action
                );
            }
        }

        let summary = GameSummary {
            game_index,
            agent: agent.name().to_string(),
            status: world.status(),
            score: world.score(),
            turns: world.turn(),
            food_remaining: world.food_remaining(),
        };
        self.observer.on_game_finished(&summary);
        summary
    }
}
