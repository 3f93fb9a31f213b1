use crate::infra::Position;
use crate::state::Mode;

pub const DEFAULT_SURVIVAL_THRESHOLD: i32 = 3;

/// Switches between foraging and survival from pursuer proximity alone.
/// Re-evaluated every turn with no hysteresis.
#[derive(Debug, Clone, Copy)]
pub struct ModeSelector {
    pub threshold: i32,
}

impl ModeSelector {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    pub fn select(&self, position: Position, pursuers: &[Position]) -> Mode {
        select_mode(position, pursuers, self.threshold)
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new(DEFAULT_SURVIVAL_THRESHOLD)
    }
}

/// `Survival` when any pursuer is within `threshold` (inclusive).
pub fn select_mode(position: Position, pursuers: &[Position], threshold: i32) -> Mode {
    if pursuers.iter().any(|p| position.distance(p) <= threshold) {
        Mode::Survival
    } else {
        Mode::Foraging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_pursuer_triggers_survival() {
        let pos = Position::new(5, 5);
        assert_eq!(select_mode(pos, &[Position::new(6, 6)], 3), Mode::Survival);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let pos = Position::new(5, 5);
        assert_eq!(select_mode(pos, &[Position::new(7, 6)], 3), Mode::Survival);
        assert_eq!(select_mode(pos, &[Position::new(7, 7)], 3), Mode::Foraging);
    }

    #[test]
    fn test_any_pursuer_counts() {
        let selector = ModeSelector::default();
        let pos = Position::new(0, 0);
        let pursuers = [Position::new(10, 10), Position::new(0, 2)];
        assert_eq!(selector.select(pos, &pursuers), Mode::Survival);
    }

    #[test]
    fn test_no_pursuers_means_foraging() {
        assert_eq!(select_mode(Position::new(0, 0), &[], 3), Mode::Foraging);
    }

    #[test]
    fn test_mode_is_not_sticky() {
        let selector = ModeSelector::new(3);
        let pursuer = [Position::new(0, 0)];
        assert_eq!(selector.select(Position::new(1, 1), &pursuer), Mode::Survival);
        assert_eq!(selector.select(Position::new(3, 1), &pursuer), Mode::Foraging);
    }
}
