use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::infra::AgentError;
use crate::planners::AgentKind;
use crate::planners::reactive::{DEFAULT_STUCK_PATIENCE, DEFAULT_SURVIVAL_THRESHOLD};

pub const DEFAULT_MAX_TURNS: u32 = 500;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub agent: AgentKind,
    pub evaluation: String,
    pub survival_threshold: i32,
    pub stuck_patience: u32,
    pub seed: Option<u64>,
    pub layout: Option<PathBuf>,
    pub max_turns: u32,
    pub games: u32,
    pub summary_folder: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent: AgentKind::ReactiveForage,
            evaluation: "score".to_string(),
            survival_threshold: DEFAULT_SURVIVAL_THRESHOLD,
            stuck_patience: DEFAULT_STUCK_PATIENCE,
            seed: None,
            layout: None,
            max_turns: DEFAULT_MAX_TURNS,
            games: 1,
            summary_folder: None,
        }
    }
}

impl AgentConfig {
    /// Read `FORAGER_*` variables from the process environment.
    pub fn from_env() -> Result<Self, AgentError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Numeric values that fail to parse keep their defaults; an unknown
    /// agent kind is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let agent = match lookup("FORAGER_AGENT") {
            Some(name) => name.parse::<AgentKind>()?,
            None => defaults.agent,
        };

        Ok(Self {
            agent,
            evaluation: lookup("FORAGER_EVAL_FN").unwrap_or(defaults.evaluation),
            survival_threshold: parsed(&lookup, "FORAGER_SURVIVAL_THRESHOLD")
                .unwrap_or(defaults.survival_threshold),
            stuck_patience: parsed(&lookup, "FORAGER_STUCK_PATIENCE")
                .unwrap_or(defaults.stuck_patience),
            seed: parsed(&lookup, "FORAGER_SEED"),
            layout: lookup("FORAGER_LAYOUT").map(PathBuf::from),
            max_turns: parsed(&lookup, "FORAGER_MAX_TURNS").unwrap_or(defaults.max_turns),
            games: parsed(&lookup, "FORAGER_GAMES").unwrap_or(defaults.games),
            summary_folder: lookup("FORAGER_SUMMARY_FOLDER").map(PathBuf::from),
        })
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|val| val.trim().parse::<T>().ok())
}
