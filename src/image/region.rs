//! Rectangular region of interest.
//!
//! A region is top-left offset plus extent, in sample units. Bounds
//! violations are configuration errors and are reported as such, never
//! silently clipped or wrapped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a region fails validation against an image.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegionError {
    #[error("region extent {w}x{h} is empty; both sides must be at least 1")]
    ZeroExtent { w: u32, h: u32 },
    #[error(
        "region ({x}, {y}, {w}, {h}) extends past image bounds {width}x{height}"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },
}

/// A rectangular region of interest inside an image.
///
/// `(x, y)` is the top-left sample, `(w, h)` the extent. A region is
/// only meaningful relative to a specific image; call [`validate`]
/// against that image's dimensions before addressing pixels with it.
///
/// [`validate`]: Region::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Horizontal offset of the top-left corner.
    pub x: u32,
    /// Vertical offset of the top-left corner.
    pub y: u32,
    /// Width in samples.
    pub w: u32,
    /// Height in samples.
    pub h: u32,
}

impl Region {
    /// Creates a new region from offset and extent.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the number of samples the region addresses.
    #[inline]
    pub fn area(&self) -> usize {
        (self.w as usize) * (self.h as usize)
    }

    /// Validates the region against image dimensions.
    ///
    /// A zero-extent region is rejected rather than treated as a no-op:
    /// a transform that silently does nothing could be mistaken for
    /// successful encryption.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), RegionError> {
        if self.w == 0 || self.h == 0 {
            return Err(RegionError::ZeroExtent {
                w: self.w,
                h: self.h,
            });
        }

        let right = self.x as u64 + self.w as u64;
        let bottom = self.y as u64 + self.h as u64;
        if right > width as u64 || bottom > height as u64 {
            return Err(RegionError::OutOfBounds {
                x: self.x,
                y: self.y,
                w: self.w,
                h: self.h,
                width,
                height,
            });
        }

        Ok(())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_region_accepted() {
        let region = Region::new(10, 20, 30, 40);
        assert!(region.validate(100, 100).is_ok());
    }

    #[test]
    fn test_region_filling_whole_image() {
        let region = Region::new(0, 0, 100, 50);
        assert!(region.validate(100, 50).is_ok());
    }

    #[test]
    fn test_zero_extent_rejected() {
        let region = Region::new(0, 0, 0, 10);
        assert!(matches!(
            region.validate(100, 100),
            Err(RegionError::ZeroExtent { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        // One sample past the right edge
        let region = Region::new(90, 0, 11, 10);
        assert!(matches!(
            region.validate(100, 100),
            Err(RegionError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_large_offsets_do_not_overflow() {
        let region = Region::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert!(matches!(
            region.validate(100, 100),
            Err(RegionError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_area() {
        assert_eq!(Region::new(5, 5, 16, 8).area(), 128);
    }
}
