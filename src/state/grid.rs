use std::collections::HashSet;

use crate::infra::{Action, Position};
use crate::state::WallSet;

/// Read-only view of the game a policy queries once per decision.
pub trait GridQuery {
    fn current_position(&self) -> Position;

    /// Heading of the agent's last move, `Stop` when unknown.
    fn current_direction(&self) -> Action {
        Action::Stop
    }

    /// Legal actions in the engine's enumeration order. May include `Stop`.
    fn legal_actions(&self) -> Vec<Action>;

    fn food_positions(&self) -> &HashSet<Position>;

    fn pursuer_positions(&self) -> &[Position];

    fn walls(&self) -> &WallSet;

    fn corner_positions(&self) -> Vec<Position>;

    fn score(&self) -> i32 {
        0
    }
}

/// Moves from `pos` that do not enter a blocked cell, in `Action::ALL` order.
pub fn legal_actions_at(walls: &WallSet, pos: Position) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| *action == Action::Stop || !walls.is_blocked(&action.apply(pos)))
        .collect()
}

/// Static snapshot implementing [`GridQuery`], used where no live engine is
/// attached.
#[derive(Clone, Debug)]
pub struct GridSnapshot {
    pub position: Position,
    pub direction: Action,
    pub walls: WallSet,
    pub food: HashSet<Position>,
    pub pursuers: Vec<Position>,
    pub corners: Vec<Position>,
    pub legal: Option<Vec<Action>>,
    pub score: i32,
}

impl GridSnapshot {
    pub fn new(walls: WallSet, position: Position) -> Self {
        let corners = vec![
            Position::new(0, 0),
            Position::new(0, walls.height - 1),
            Position::new(walls.width - 1, 0),
            Position::new(walls.width - 1, walls.height - 1),
        ];
        Self {
            position,
            direction: Action::Stop,
            walls,
            food: HashSet::new(),
            pursuers: Vec::new(),
            corners,
            legal: None,
            score: 0,
        }
    }

    pub fn with_food(mut self, food: impl IntoIterator<Item = Position>) -> Self {
        self.food = food.into_iter().collect();
        self
    }

    pub fn with_pursuers(mut self, pursuers: impl IntoIterator<Item = Position>) -> Self {
        self.pursuers = pursuers.into_iter().collect();
        self
    }

    /// Pin the legal action set instead of deriving it from walls.
    pub fn with_legal(mut self, legal: Vec<Action>) -> Self {
        self.legal = Some(legal);
        self
    }

    pub fn with_direction(mut self, direction: Action) -> Self {
        self.direction = direction;
        self
    }
}

impl GridQuery for GridSnapshot {
    fn current_position(&self) -> Position {
        self.position
    }

    fn current_direction(&self) -> Action {
        self.direction
    }

    fn legal_actions(&self) -> Vec<Action> {
        match &self.legal {
            Some(legal) => legal.clone(),
            None => legal_actions_at(&self.walls, self.position),
        }
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
        self.corners.clone()
    }

    fn score(&self) -> i32 {
        self.score
    }
}
