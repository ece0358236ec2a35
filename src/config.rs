use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::application::TieBreak;
use crate::error::{ConfigError, Error, Result};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub evaluation: EvaluationConfig,
    pub selection: SelectionConfig,
}

/// Bounds on concurrent predicate evaluation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Per-predicate timeout in milliseconds.
    pub predicate_timeout_ms: u64,
    /// Process-wide cap on concurrently running predicates.
    pub max_concurrent_predicates: usize,
}

/// Equal-CTR tie-break policy.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// "first" (prefer earlier store order) or "seeded".
    pub tie_break: String,
    /// Seed used when `tie_break` is "seeded".
    pub tie_break_seed: u64,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.evaluation.predicate_timeout_ms == 0 {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "evaluation.predicate_timeout_ms",
                reason: "must be greater than zero".into(),
            }));
        }
        if self.evaluation.max_concurrent_predicates == 0 {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "evaluation.max_concurrent_predicates",
                reason: "must be greater than zero".into(),
            }));
        }
        if !matches!(self.selection.tie_break.as_str(), "first" | "seeded") {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "selection.tie_break",
                reason: format!("unknown policy '{}'", self.selection.tie_break),
            }));
        }
        Ok(())
    }

    /// Per-predicate timeout as a [`Duration`].
    pub fn predicate_timeout(&self) -> Duration {
        Duration::from_millis(self.evaluation.predicate_timeout_ms)
    }

    /// Tie-break policy for the selection service.
    pub fn tie_break(&self) -> TieBreak {
        match self.selection.tie_break.as_str() {
            "seeded" => TieBreak::Seeded(self.selection.tie_break_seed),
            _ => TieBreak::FirstEncountered,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            evaluation: EvaluationConfig::default(),
            selection: SelectionConfig::default(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            predicate_timeout_ms: 1000,
            max_concurrent_predicates: 64,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tie_break: "first".into(),
            tie_break_seed: 0,
        }
    }
}
