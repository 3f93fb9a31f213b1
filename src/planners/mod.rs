pub mod reactive;
pub mod reflex;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::config::AgentConfig;
use crate::infra::{Action, AgentError};
use crate::state::GridQuery;

pub use reactive::ReactiveAgent;
pub use reflex::{EvaluationRegistry, GoWestAgent, GreedyAgent, HungryAgent, LeftTurnAgent, SurvivalAgent};

/// A decision maker invoked once per turn by the engine.
pub trait Agent {
    fn name(&self) -> &'static str;

    /// Choose a move from `grid.legal_actions()`. Never fails; `Stop` is the
    /// last resort.
    fn get_action(&mut self, grid: &dyn GridQuery) -> Action;
}

/// Uniformly random pick from the legal set.
pub fn random_legal<R: Rng + ?Sized>(rng: &mut R, legal: &[Action]) -> Result<Action, AgentError> {
    legal.choose(rng).copied().ok_or(AgentError::NoLegalMove)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    ReactiveForage,
    ReactiveExplore,
    Survival,
    Hungry,
    Greedy,
    GoWest,
    LeftTurn,
}

impl AgentKind {
    pub const ALL: [AgentKind; 7] = [
        AgentKind::ReactiveForage,
        AgentKind::ReactiveExplore,
        AgentKind::Survival,
        AgentKind::Hungry,
        AgentKind::Greedy,
        AgentKind::GoWest,
        AgentKind::LeftTurn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::ReactiveForage => "reactive-forage",
            AgentKind::ReactiveExplore => "reactive-explore",
            AgentKind::Survival => "survival",
            AgentKind::Hungry => "hungry",
            AgentKind::Greedy => "greedy",
            AgentKind::GoWest => "go-west",
            AgentKind::LeftTurn => "left-turn",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| AgentError::UnknownAgent(s.to_string()))
    }
}

/// Build the configured agent. Evaluation names are resolved here so a bad
/// name fails at startup rather than mid-game.
pub fn build_agent(
    config: &AgentConfig,
    registry: &EvaluationRegistry,
    rng: StdRng,
) -> Result<Box<dyn Agent>, AgentError> {
    let agent: Box<dyn Agent> = match config.agent {
        AgentKind::ReactiveForage => {
            Box::new(ReactiveAgent::foraging(config.survival_threshold, rng))
        }
        AgentKind::ReactiveExplore => Box::new(ReactiveAgent::exploring(
            config.survival_threshold,
            config.stuck_patience,
            rng,
        )),
        AgentKind::Survival => Box::new(SurvivalAgent),
        AgentKind::Hungry => Box::new(HungryAgent),
        AgentKind::Greedy => {
            let evaluation = registry.lookup(&config.evaluation)?;
            Box::new(GreedyAgent::new(evaluation, rng))
        }
        AgentKind::GoWest => Box::new(GoWestAgent),
        AgentKind::LeftTurn => Box::new(LeftTurnAgent),
    };
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_agent_kind_parsing() {
        assert_eq!("reactive-forage".parse::<AgentKind>().unwrap(), AgentKind::ReactiveForage);
        assert_eq!("LEFT_TURN".parse::<AgentKind>().unwrap(), AgentKind::LeftTurn);
        assert!(matches!(
            "teleporter".parse::<AgentKind>(),
            Err(AgentError::UnknownAgent(name)) if name == "teleporter"
        ));
    }

    #[test]
    fn test_build_every_kind() {
        let registry = EvaluationRegistry::new();
        for kind in AgentKind::ALL {
            let config = AgentConfig {
                agent: kind,
                ..AgentConfig::default()
            };
            let agent = build_agent(&config, &registry, StdRng::seed_from_u64(0)).unwrap();
            assert_eq!(agent.name(), kind.as_str());
        }
    }

    #[test]
    fn test_unknown_evaluation_fails_at_build() {
        let config = AgentConfig {
            agent: AgentKind::Greedy,
            evaluation: "telepathy".to_string(),
            ..AgentConfig::default()
        };
        let result = build_agent(&config, &EvaluationRegistry::new(), StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(AgentError::UnknownEvaluation(_))));
    }

    #[test]
    fn test_random_legal_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(random_legal(&mut rng, &[]), Err(AgentError::NoLegalMove)));
    }
}
