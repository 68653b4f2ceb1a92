//! Locator configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocatorConfigError {
    #[error("window size must be at least 1")]
    ZeroWindow,
}

/// Configuration for the variance-based locator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Side length of the square scan window, in samples.
    pub window_size: u32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self { window_size: 64 }
    }
}

impl LocatorConfig {
    /// Creates a configuration with the given window size.
    pub fn with_window_size(window_size: u32) -> Self {
        Self { window_size }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), LocatorConfigError> {
        if self.window_size == 0 {
            return Err(LocatorConfigError::ZeroWindow);
        }
        Ok(())
    }
}
