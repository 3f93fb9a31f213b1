use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::infra::{Action, Position, validate_move};
use crate::planners::reflex::evaluation::{COLLISION_PENALTY, FOOD_REWARD, TIME_PENALTY};
use crate::sim::Layout;
use crate::state::{GridQuery, WallSet, legal_actions_at};

pub const WIN_REWARD: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
    TurnLimit,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Minimal engine: one agent, randomly wandering pursuers, food to collect.
#[derive(Debug, Clone)]
pub struct GridWorld {
    walls: WallSet,
    food: HashSet<Position>,
    agent: Position,
    heading: Action,
    pursuers: Vec<Position>,
    pursuer_headings: Vec<Action>,
    score: i32,
    turn: u32,
    status: GameStatus,
}

impl GridWorld {
    pub fn new(layout: &Layout) -> Self {
        Self {
            walls: layout.walls.clone(),
            food: layout.food.clone(),
            agent: layout.agent_start,
            heading: Action::Stop,
            pursuers: layout.pursuer_starts.clone(),
            pursuer_headings: vec![Action::Stop; layout.pursuer_starts.len()],
            score: 0,
            turn: 0,
            status: GameStatus::Active,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn food_remaining(&self) -> usize {
        self.food.len()
    }

    pub fn end_turn_limit(&mut self) {
        if self.status == GameStatus::Active {
            self.status = GameStatus::TurnLimit;
        }
    }

    /// Apply the agent's move, then move every pursuer. Illegal moves are
    /// replaced before being executed.
    pub fn step<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> GameStatus {
        if self.status.is_finished() {
            return self.status;
        }
        self.turn += 1;

        let action = validate_move(action, &self.legal_actions());
        self.agent = action.apply(self.agent);
        if action != Action::Stop {
            self.heading = action;
        }
        self.score -= TIME_PENALTY;

        if self.food.remove(&self.agent) {
            self.score += FOOD_REWARD;
            if self.food.is_empty() {
                self.score += WIN_REWARD;
                self.status = GameStatus::Won;
                return self.status;
            }
        }
        if self.collided() {
            return self.status;
        }

        for index in 0..self.pursuers.len() {
            let pursuer = self.pursuers[index];
            let options = self.pursuer_options(pursuer, self.pursuer_headings[index]);
            if let Some(&chosen) = options.choose(rng) {
                self.pursuers[index] = chosen.apply(pursuer);
                self.pursuer_headings[index] = chosen;
            }
            if self.collided() {
                return self.status;
            }
        }

        self.status
    }

    fn pursuer_options(&self, pursuer: Position, heading: Action) -> Vec<Action> {
        let moves: Vec<Action> = legal_actions_at(&self.walls, pursuer)
            .into_iter()
            .filter(|action| *action != Action::Stop)
            .collect();
        if moves.len() > 1 {
            moves
                .into_iter()
                .filter(|action| *action != heading.reverse())
                .collect()
        } else {
            moves
        }
    }

    fn collided(&mut self) -> bool {
        if self.pursuers.contains(&self.agent) {
            debug!("Caught at {} on turn {}", self.agent, self.turn);
            self.score -= COLLISION_PENALTY;
            self.status = GameStatus::Lost;
            return true;
        }
        false
    }

    pub fn draw_ascii_map(&self) -> String {
        let mut output = String::new();
        for y in 0..self.walls.height {
            for x in 0..self.walls.width {
                let pos = Position::new(x, y);
                let cell = if pos == self.agent {
                    'P'
                } else if self.pursuers.contains(&pos) {
                    'G'
                } else if self.walls.contains(&pos) {
                    '%'
                } else if self.food.contains(&pos) {
                    '.'
                } else {
                    ' '
                };
                output.push(cell);
            }
            output.push('\n');
        }
        output
    }
}

impl GridQuery for GridWorld {
    fn current_position(&self) -> Position {
        self.agent
    }

    fn current_direction(&self) -> Action {
        self.heading
    }

    fn legal_actions(&self) -> Vec<Action> {
        legal_actions_at(&self.walls, self.agent)
    }

    fn food_positions(&self) -> &HashSet<Position> {
        &self.food
    }

    fn pursuer_positions(&self) -> &[Position] {
        &self.pursuers
    }

    fn walls(&self) -> &WallSet {
        &self.walls
    }

    fn corner_positions(&self) -> Vec<Position> {
        let (right, bottom) = (self.walls.width - 2, self.walls.height - 2);
        vec![
            Position::new(1, 1),
            Position::new(1, bottom),
            Position::new(right, 1),
            Position::new(right, bottom),
        ]
    }

    fn score(&self) -> i32 {
        self.score
    }
}
