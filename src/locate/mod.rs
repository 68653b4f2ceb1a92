//! Automatic region-of-interest detection.
//!
//! Finds the most detailed part of an image by scanning fixed-size
//! blocks and scoring each by sample variance. High variance marks
//! edges and texture, which is where selective encryption hides the
//! most information.

mod config;
mod variance;

pub use config::{LocatorConfig, LocatorConfigError};
pub use variance::Locator;
