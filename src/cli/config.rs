//! Configuration file loading
//!
//! The config file is JSON. Every section and field has a default, so an
//! empty object (or no file at all) is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheConfig, KeyPattern};
use crate::factory::SeedConfig;
use crate::http_server::HttpServerConfig;
use crate::lessons::LessonSettings;
use crate::store::StoreConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub lessons: LessonSettings,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.store.bulk_batch_size == 0 {
            return Err(CliError::config_error("store.bulk_batch_size must be > 0"));
        }

        if self.cache.ttl_secs == 0 {
            return Err(CliError::config_error("cache.ttl_secs must be > 0"));
        }

        if self.cache.invalidation_pattern.is_empty() {
            return Err(CliError::config_error(
                "cache.invalidation_pattern must not be empty",
            ));
        }

        self.invalidation_pattern()?;

        Ok(())
    }

    /// Compiled form of `cache.invalidation_pattern`
    pub fn invalidation_pattern(&self) -> CliResult<KeyPattern> {
        KeyPattern::parse(&self.cache.invalidation_pattern).map_err(|e| {
            CliError::config_error(format!(
                "Invalid cache.invalidation_pattern '{}': {}",
                self.cache.invalidation_pattern, e
            ))
        })
    }
}
