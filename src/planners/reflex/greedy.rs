use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::infra::Action;
use crate::planners::Agent;
use crate::planners::reflex::evaluation::{EvaluationFn, Successor};
use crate::state::GridQuery;

/// Scores every non-`Stop` successor and picks randomly among the best.
pub struct GreedyAgent<R: Rng> {
    evaluation: EvaluationFn,
    rng: R,
}

impl<R: Rng> GreedyAgent<R> {
    pub fn new(evaluation: EvaluationFn, rng: R) -> Self {
        Self { evaluation, rng }
    }
}

impl<R: Rng> Agent for GreedyAgent<R> {
    fn name(&self) -> &'static str {
        "greedy"
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn get_action(&mut self, grid: &dyn GridQuery) -> Action {
        let legal: Vec<Action> = grid
            .legal_actions()
            .into_iter()
            .filter(|action| *action != Action::Stop)
            .collect();

        let scored: Vec<(i32, Action)> = legal
            .iter()
            .map(|action| ((self.evaluation)(&Successor::new(grid, *action)), *action))
            .collect();
        let Some(best_score) = scored.iter().map(|(score, _)| *score).max() else {
            return Action::Stop;
        };

        let best: Vec<Action> = scored
            .iter()
            .filter(|(score, _)| *score == best_score)
            .map(|(_, action)| *action)
            .collect();
        debug!("Best score {} shared by {:?}", best_score, best);
        best.choose(&mut self.rng).copied().unwrap_or(Action::Stop)
    }
}
