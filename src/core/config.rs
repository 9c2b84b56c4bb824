//! Session configuration.
//!
//! `DuelConfig` is built with builder methods or loaded from JSON. Every
//! loading path validates before handing the config out.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Face-down cards dealt to each side at the start of a round.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DuelConfig {
    /// Cards dealt to each side per round.
    pub hand_size: usize,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Resolved rounds after which the action control prompts a restart.
    /// `None` never prompts on its own.
    pub rounds_per_match: Option<u32>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
            rounds_per_match: None,
        }
    }
}

impl DuelConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Prompt a restart after this many resolved rounds.
    #[must_use]
    pub fn with_rounds_per_match(mut self, rounds: u32) -> Self {
        self.rounds_per_match = Some(rounds);
        self
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DuelConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse { source, path: None })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        let config: DuelConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            source,
            path: Some(path.to_path_buf()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges without performing I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid {
                field: "hand_size",
                message: "must deal at least one card".to_string(),
            });
        }
        if self.rounds_per_match == Some(0) {
            return Err(ConfigError::Invalid {
                field: "rounds_per_match",
                message: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config: {source}")]
    Parse {
        source: serde_json::Error,
        path: Option<PathBuf>,
    },
    #[error("invalid config field `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DuelConfig::default();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.seed, None);
        assert_eq!(config.rounds_per_match, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DuelConfig::new()
            .with_hand_size(3)
            .with_seed(42)
            .with_rounds_per_match(5);

        assert_eq!(config.hand_size, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rounds_per_match, Some(5));
    }

    #[test]
    fn test_from_json_partial() {
        let config = DuelConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.hand_size, DEFAULT_HAND_SIZE);
    }

    #[test]
    fn test_from_json_rejects_zero_hand() {
        let err = DuelConfig::from_json_str(r#"{ "hand_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hand_size", .. }));
    }

    #[test]
    fn test_from_json_rejects_zero_rounds() {
        let err = DuelConfig::from_json_str(r#"{ "rounds_per_match": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "rounds_per_match", .. }));
    }

    #[test]
    fn test_from_json_unknown_field() {
        let err = DuelConfig::from_json_str(r#"{ "deck_size": 40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_missing_path() {
        let err = DuelConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
