//! Seed parameters for the logistic map.
//!
//! Validation here is caller policy, not a generator precondition: the
//! generator accepts any parameters and merely loses statistical
//! quality outside the chaotic band. The config and CLI layers call
//! [`ChaosParams::validate`] so that a user cannot accidentally pick a
//! degenerate key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Practical lower edge of the chaotic band for the control parameter.
///
/// The map becomes chaotic near r ≈ 3.569946; the narrower band
/// `[3.70, 4.00]` avoids the periodic windows just above onset.
pub const R_MIN: f64 = 3.70;
/// Upper edge of the control parameter; above 4.0 the map diverges.
pub const R_MAX: f64 = 4.00;

/// Errors raised when seed parameters fall outside the accepted band.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamsError {
    #[error("control parameter r = {observed} outside chaotic band [3.70, 4.00]")]
    ControlOutOfBand { observed: f64 },
    #[error("initial condition x0 = {observed} outside open interval (0, 1)")]
    InitialOutOfRange { observed: f64 },
}

/// Seed parameters of the logistic map keystream.
///
/// `r` is the control parameter, `x0` the initial condition. These two
/// values are the entire key material; the crate never persists or
/// manages them beyond a single transform call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaosParams {
    /// Control parameter of the recurrence `x ← r·x·(1−x)`.
    pub r: f64,
    /// Initial condition, strictly inside `(0, 1)`.
    pub x0: f64,
}

impl Default for ChaosParams {
    fn default() -> Self {
        Self { r: 3.99, x0: 0.5 }
    }
}

impl ChaosParams {
    /// Creates parameters without validating them.
    pub fn new(r: f64, x0: f64) -> Self {
        Self { r, x0 }
    }

    /// Checks the parameters against the practical chaotic band.
    ///
    /// `r` must lie in `[3.70, 4.00]` and `x0` strictly inside
    /// `(0, 1)`; the endpoints `0` and `1` are fixed points of the map
    /// and collapse the keystream to a constant.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(R_MIN..=R_MAX).contains(&self.r) {
            return Err(ParamsError::ControlOutOfBand { observed: self.r });
        }
        if !(self.x0 > 0.0 && self.x0 < 1.0) {
            return Err(ParamsError::InitialOutOfRange { observed: self.x0 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(ChaosParams::default().validate().is_ok());
    }

    #[test]
    fn test_band_edges_accepted() {
        assert!(ChaosParams::new(3.70, 0.5).validate().is_ok());
        assert!(ChaosParams::new(4.00, 0.5).validate().is_ok());
    }

    #[test]
    fn test_out_of_band_r_rejected() {
        assert!(matches!(
            ChaosParams::new(3.5, 0.5).validate(),
            Err(ParamsError::ControlOutOfBand { .. })
        ));
        assert!(matches!(
            ChaosParams::new(4.01, 0.5).validate(),
            Err(ParamsError::ControlOutOfBand { .. })
        ));
    }

    #[test]
    fn test_fixed_points_rejected() {
        assert!(matches!(
            ChaosParams::new(3.99, 0.0).validate(),
            Err(ParamsError::InitialOutOfRange { .. })
        ));
        assert!(matches!(
            ChaosParams::new(3.99, 1.0).validate(),
            Err(ParamsError::InitialOutOfRange { .. })
        ));
    }

    #[test]
    fn test_nan_x0_rejected() {
        assert!(ChaosParams::new(3.99, f64::NAN).validate().is_err());
    }
}
