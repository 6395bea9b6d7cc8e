use std::collections::BTreeMap;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Breed name cannot be empty")]
    EmptyBreedName,

    #[error("Breed '{0}' has an empty sub-breed name")]
    EmptySubBreedName(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .breedcache/config.yaml (project config)
    /// 3. .breedcache/local.yaml (project local overrides, optional)
    /// 4. Environment variables (BREEDCACHE_* prefix, highest priority)
    ///
    /// A configured breed table replaces the built-in sample table as a
    /// whole; the sample table applies only when no source names one.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Self::defaults())
            .merge(Yaml::file(".breedcache/config.yaml"))
            .merge(Yaml::file(".breedcache/local.yaml"))
            .merge(Env::prefixed("BREEDCACHE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Self::defaults())
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Programmatic defaults without the breed table, so figment never merges
    /// configured breeds into the sample ones.
    fn defaults() -> Serialized<Config> {
        Serialized::defaults(Config {
            breeds: BTreeMap::new(),
            ..Config::default()
        })
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        for (breed, sub_breeds) in &config.breeds {
            if breed.is_empty() {
                return Err(ConfigError::EmptyBreedName);
            }
            if sub_breeds.iter().any(String::is_empty) {
                return Err(ConfigError::EmptySubBreedName(breed.clone()));
            }
        }

        Ok(())
    }
}
