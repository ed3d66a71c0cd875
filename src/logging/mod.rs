//! # Logging setup
//!
//! All crate code logs through the `log` facade. Binaries call one of the
//! `LoggingSystem` initializers once at startup to install `env_logger`,
//! with the level taken from configuration. `RUST_LOG` still overrides it.

use crate::config::LoaderConfig;
use log::LevelFilter;

/// Installs the process-wide logger
pub struct LoggingSystem;

impl LoggingSystem {
    /// Initialize logging with the default configuration
    pub fn init_default() -> Result<(), LoggingError> {
        Self::init_with_config(&LoaderConfig::default())
    }

    /// Initialize logging with the level from `config`
    pub fn init_with_config(config: &LoaderConfig) -> Result<(), LoggingError> {
        Self::init_with_level(&config.log_level)
    }

    /// Initialize logging with an explicit level name
    pub fn init_with_level(level: &str) -> Result<(), LoggingError> {
        let level_filter = parse_level(level)?;
        env_logger::Builder::new()
            .filter_level(level_filter)
            .parse_default_env()
            .try_init()
            .map_err(|_| LoggingError::AlreadyInitialized)
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| LoggingError::Config(format!("Invalid log level: {}", level)))
}

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
    #[error("Configuration error: {0}")]
    Config(String),
}
