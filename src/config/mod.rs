//! Configuration for module discovery and logging
//!
//! The configuration is read from a TOML file. Every key is optional:
//!
//! ```toml
//! modules_dir = "modules"
//! log_level = "info"
//! features = ["basic", "avast_only"]
//! ```

pub mod error;

pub use error::ConfigError;

use crate::module::ImportFeatures;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by the library entry points and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory scanned for `*.json` module schemas
    pub modules_dir: PathBuf,
    /// Default log level (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
    /// Import features modules are loaded with
    pub features: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            modules_dir: PathBuf::from("modules"),
            log_level: "info".to_string(),
            features: vec!["basic".to_string()],
        }
    }
}

impl LoaderConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the log level and every feature name are known
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::validation(format!(
                "Invalid log level: {}",
                self.log_level
            )));
        }
        self.import_features().map(|_| ())
    }

    /// Union of the configured import features
    pub fn import_features(&self) -> Result<ImportFeatures, ConfigError> {
        let mut features = self.features.iter().map(|name| {
            ImportFeatures::from_name(name)
                .ok_or_else(|| ConfigError::validation(format!("Unknown import feature: {name}")))
        });

        let first = features
            .next()
            .ok_or_else(|| ConfigError::validation("At least one import feature is required"))??;
        features.try_fold(first, |acc, feature| Ok(acc | feature?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::from_toml_str("").unwrap();
        assert_eq!(config, LoaderConfig::default());
        assert_eq!(config.import_features().unwrap(), ImportFeatures::BASIC);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loader.toml");
        std::fs::write(
            &path,
            "modules_dir = \"schemas\"\nfeatures = [\"basic\", \"deprecated\"]\n",
        )
        .unwrap();

        let config = LoaderConfig::from_file(&path).unwrap();
        assert_eq!(config.modules_dir, PathBuf::from("schemas"));
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.import_features().unwrap(),
            ImportFeatures::BASIC | ImportFeatures::DEPRECATED
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            LoaderConfig::from_toml_str("features = [\"premium\"]"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            LoaderConfig::from_toml_str("features = []"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            LoaderConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            LoaderConfig::from_toml_str("log_level = 3"),
            Err(ConfigError::Toml(_))
        ));
    }
}
