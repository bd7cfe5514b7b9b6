//! Game configuration
//!
//! Every field has a default, so an absent or partial `detective-quest.toml`
//! is fine.

use crate::data::{DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT};
use crate::game::accusation::CORROBORATION_THRESHOLD;
use crate::{GameError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File the binary looks for in the working directory
pub const CONFIG_FILE: &str = "detective-quest.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Buckets in the clue index
    pub bucket_count: usize,

    /// Clues needed to confirm an accusation
    pub corroboration_threshold: usize,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            corroboration_threshold: CORROBORATION_THRESHOLD,
            log_filter: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("In config file {}", path.display()))
    }

    /// Load from file, or fall back to defaults when it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> std::result::Result<(), GameError> {
        if self.bucket_count == 0 {
            return Err(GameError::InvalidConfig("bucket_count must be at least 1".to_string()));
        }
        if self.bucket_count > MAX_BUCKET_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "bucket_count must be at most {}, got {}",
                MAX_BUCKET_COUNT, self.bucket_count
            )));
        }
        if self.corroboration_threshold == 0 {
            return Err(GameError::InvalidConfig(
                "corroboration_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
