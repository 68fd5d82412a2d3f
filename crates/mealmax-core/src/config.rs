//! Arena configuration, loadable from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ScorePolicy;
use crate::ports::{RandomSource, SeededRandom, ThreadRandom};

/// Arena configuration.
///
/// ```json
/// { "score": { "low_penalty": 3, "med_penalty": 2, "high_penalty": 1, "delta_divisor": 100 },
///   "seed": 42 }
/// ```
/// Every field is optional, including each field inside `score`; omitted
/// fields take the `default_v1()` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub score: ScorePolicy,

    /// Seed for reproducible battles; `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ArenaConfig {
    pub fn default_v1() -> Self {
        Self {
            score: ScorePolicy::default_v1(),
            seed: None,
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let score = &self.score;
        if !score.delta_divisor.is_finite() || score.delta_divisor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "delta_divisor must be a positive number, got {}",
                score.delta_divisor
            )));
        }
        let penalties = [score.low_penalty, score.med_penalty, score.high_penalty];
        if penalties.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::Invalid(
                "difficulty penalties must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}
