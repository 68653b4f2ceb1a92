//! TOML configuration for the surrounding application.
//!
//! The library itself takes every setting as an explicit argument;
//! this layer only exists so the CLI can load named, documented
//! defaults from a file instead of repeating literals.

use crate::keystream::ChaosParams;
use crate::locate::LocatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    #[error("invalid chaos parameters: {0}")]
    InvalidChaos(#[from] crate::keystream::ParamsError),
    #[error("invalid locator settings: {0}")]
    InvalidLocator(#[from] crate::locate::LocatorConfigError),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Logistic-map seed parameters.
    #[serde(default)]
    pub chaos: ChaosParams,
    /// Automatic ROI detection settings.
    #[serde(default)]
    pub locator: LocatorConfig,
}

impl FileConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// The chaos parameters are held to the practical chaotic band
    /// here — this is the policy layer the generator itself omits.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chaos.validate()?;
        self.locator.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_full_file() {
        let toml = r#"
            [chaos]
            r = 3.91
            x0 = 0.37

            [locator]
            window_size = 32
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.chaos.r, 3.91);
        assert_eq!(config.chaos.x0, 0.37);
        assert_eq!(config.locator.window_size, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.chaos.r, 3.99);
        assert_eq!(config.locator.window_size, 64);
    }

    #[test]
    fn test_out_of_band_chaos_rejected() {
        let toml = r#"
            [chaos]
            r = 2.5
            x0 = 0.5
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidChaos(_))
        ));
    }
}
