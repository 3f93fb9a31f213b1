use tracing::debug;

use crate::infra::{Action, AgentError, Position};

/// One-step lookahead that keeps as far from the nearest pursuer as possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurvivalPolicy;

impl SurvivalPolicy {
    /// Legal move maximising the minimum Manhattan distance to any pursuer.
    /// `Stop` is only considered when it is the sole legal move; ties go to
    /// the first action in `legal` order.
    pub fn choose_move(
        &self,
        position: Position,
        legal: &[Action],
        pursuers: &[Position],
    ) -> Result<Action, AgentError> {
        let moving: Vec<Action> = legal.iter().copied().filter(|a| *a != Action::Stop).collect();
        let candidates: &[Action] = if moving.is_empty() { legal } else { &moving };

        let mut best: Option<(Action, i32)> = None;
        for action in candidates {
            let next = action.apply(position);
            let safety = next.min_distance(pursuers).unwrap_or(i32::MAX);
            if best.is_none_or(|(_, best_safety)| safety > best_safety) {
                best = Some((*action, safety));
            }
        }

        let (action, safety) = best.ok_or(AgentError::NoLegalMove)?;
        debug!("Fleeing {} with pursuer distance {}", action, safety);
        Ok(action)
    }
}
