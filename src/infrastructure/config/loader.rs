use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid budget tier: {0}. Must be at least 1")]
    InvalidTier(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Document path cannot be empty: {0}")]
    EmptyDocumentPath(&'static str),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .herald/config.yaml (project config, created by init)
    /// 3. .herald/local.yaml (project local overrides, optional)
    /// 4. Environment variables (HERALD_* prefix, highest priority)
    ///
    /// Note: Configuration is always project-local (pwd/.herald/) so one
    /// machine can govern several promotion pipelines independently.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            // 1. Start with programmatic defaults
            .merge(Serialized::defaults(Config::default()))
            // 2. Merge project config (primary config, created by init)
            .merge(Yaml::file(".herald/config.yaml"))
            // 3. Merge project local overrides (optional, for dev/test overrides)
            .merge(Yaml::file(".herald/local.yaml"))
            // 4. Merge environment variables (highest priority)
            .merge(Env::prefixed("HERALD_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.budget.tier == 0 {
            return Err(ConfigError::InvalidTier(config.budget.tier));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let required_paths: [(&'static str, &str); 4] = [
            ("governance", &config.documents.governance),
            ("promotion_queue", &config.documents.promotion_queue),
            ("decisions", &config.documents.decisions),
            ("audit_dir", &config.documents.audit_dir),
        ];
        for (field, path) in required_paths {
            if path.is_empty() {
                return Err(ConfigError::EmptyDocumentPath(field));
            }
        }

        Ok(())
    }
}
