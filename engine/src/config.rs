//! Generator configuration
//!
//! Lets the host application pick a seed from its own config files instead
//! of hard-coding one.
//!
//! # Example
//!
//! ```
//! use mt64_core_rs::RngConfig;
//!
//! let config = RngConfig::from_json(r#"{ "seed": 5489 }"#).unwrap();
//! let mut rng = config.build().unwrap();
//! assert_eq!(rng.next(), 14514284786278117030);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::rng::{Mt64, DEFAULT_SEED};

/// How to seed a new generator
///
/// At most one of `seed` and `key` may be set. With neither, the generator
/// uses [`DEFAULT_SEED`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RngConfig {
    /// Single-word seed
    #[serde(default)]
    pub seed: Option<u64>,

    /// Key array for multi-word seeding
    #[serde(default)]
    pub key: Option<Vec<u64>>,
}

impl RngConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            key: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RngError> {
        let config: RngConfig = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse generator config");
            RngError::InvalidConfig(e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RngError> {
        match (&self.seed, &self.key) {
            (Some(_), Some(_)) => Err(RngError::InvalidConfig(
                "seed and key are mutually exclusive".to_string(),
            )),
            (None, Some(key)) if key.is_empty() => {
                Err(RngError::InvalidConfig("key must not be empty".to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Construct the configured generator
    pub fn build(&self) -> Result<Mt64, RngError> {
        self.validate()?;
        match (&self.seed, &self.key) {
            (Some(seed), None) => Ok(Mt64::new(*seed)),
            (None, Some(key)) => Mt64::from_key(key),
            _ => {
                tracing::debug!(seed = DEFAULT_SEED, "no seed configured, using default");
                Ok(Mt64::new(DEFAULT_SEED))
            }
        }
    }
}
