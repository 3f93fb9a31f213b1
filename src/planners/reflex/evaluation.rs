use std::collections::HashMap;

use crate::infra::{Action, AgentError, Position};
use crate::state::GridQuery;

pub const TIME_PENALTY: i32 = 1;
pub const FOOD_REWARD: i32 = 10;
pub const COLLISION_PENALTY: i32 = 500;

/// The grid as seen after taking `action`.
pub struct Successor<'a> {
    pub grid: &'a dyn GridQuery,
    pub action: Action,
    pub position: Position,
}

impl<'a> Successor<'a> {
    pub fn new(grid: &'a dyn GridQuery, action: Action) -> Self {
        Self {
            grid,
            action,
            position: action.apply(grid.current_position()),
        }
    }
}

pub type EvaluationFn = fn(&Successor<'_>) -> i32;

/// Engine-style score: time penalty, food reward, collision penalty.
pub fn score_evaluation(successor: &Successor<'_>) -> i32 {
    let grid = successor.grid;
    let mut score = grid.score() - TIME_PENALTY;
    if grid.food_positions().contains(&successor.position) {
        score += FOOD_REWARD;
    }
    if grid.pursuer_positions().contains(&successor.position) {
        score -= COLLISION_PENALTY;
    }
    score
}

/// Closer to food is better.
pub fn food_evaluation(successor: &Successor<'_>) -> i32 {
    successor
        .position
        .min_distance(successor.grid.food_positions())
        .map_or(0, |distance| -distance)
}

/// Further from the nearest pursuer is better.
pub fn safety_evaluation(successor: &Successor<'_>) -> i32 {
    successor
        .position
        .min_distance(successor.grid.pursuer_positions())
        .unwrap_or(i32::MAX)
}

/// Evaluation functions addressable by name.
pub struct EvaluationRegistry {
    functions: HashMap<&'static str, EvaluationFn>,
}

impl EvaluationRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };
        registry.register("score", score_evaluation);
        registry.register("food", food_evaluation);
        registry.register("safety", safety_evaluation);
        registry
    }

    pub fn register(&mut self, name: &'static str, function: EvaluationFn) {
        self.functions.insert(name, function);
    }

    pub fn lookup(&self, name: &str) -> Result<EvaluationFn, AgentError> {
        self.functions
            .get(name)
            .copied()
            .ok_or_else(|| AgentError::UnknownEvaluation(name.to_string()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for EvaluationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GridSnapshot, WallSet};

    fn grid() -> GridSnapshot {
        let mut grid = GridSnapshot::new(WallSet::new(5, 5), Position::new(2, 2))
            .with_food([Position::new(3, 2)])
            .with_pursuers([Position::new(1, 2)]);
        grid.score = 20;
        grid
    }

    #[test]
    fn test_score_evaluation() {
        let grid = grid();
        assert_eq!(score_evaluation(&Successor::new(&grid, Action::East)), 29);
        assert_eq!(score_evaluation(&Successor::new(&grid, Action::North)), 19);
        assert_eq!(score_evaluation(&Successor::new(&grid, Action::West)), 19 - COLLISION_PENALTY);
    }

    #[test]
    fn test_food_and_safety_evaluations() {
        let grid = grid();
        assert_eq!(food_evaluation(&Successor::new(&grid, Action::East)), 0);
        assert_eq!(food_evaluation(&Successor::new(&grid, Action::West)), -2);
        assert_eq!(safety_evaluation(&Successor::new(&grid, Action::East)), 2);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = EvaluationRegistry::new();
        assert_eq!(registry.names(), vec!["food", "safety", "score"]);
        assert!(registry.lookup("score").is_ok());
        assert!(matches!(
            registry.lookup("scoreEvaluation"),
            Err(AgentError::UnknownEvaluation(name)) if name == "scoreEvaluation"
        ));
    }
}
