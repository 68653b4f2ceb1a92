//! Variance-based block scan.

use super::LocatorConfig;
use crate::analysis::RegionStats;
use crate::image::{GrayImage, Region};

/// Selects the image block with the greatest sample variance.
///
/// The image is tiled with non-overlapping `window_size × window_size`
/// blocks anchored at the origin. Block origins advance by the window
/// size in each axis and stop strictly before `dimension − window_size`,
/// so the trailing row and column of blocks (partial or exactly
/// fitting) are never visited. Ties keep the block found first in
/// row-major scan order, making the result fully deterministic.
pub struct Locator {
    config: LocatorConfig,
}

impl Locator {
    /// Creates a locator with the given configuration.
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configured window size.
    #[inline]
    pub fn window_size(&self) -> u32 {
        self.config.window_size
    }

    /// Locates the highest-variance block in the image.
    ///
    /// When the image is smaller than the window in either dimension,
    /// no blocks are visited and the fallback region
    /// `(0, 0, window_size, window_size)` is returned. That fallback
    /// may extend past the image; callers must re-validate it before
    /// addressing pixels (the cipher rejects it if it does not fit).
    pub fn locate(&self, image: &GrayImage) -> Region {
        let win = self.config.window_size;
        let win_usize = win as usize;
        let width = image.width() as usize;
        let height = image.height() as usize;

        let mut best = Region::new(0, 0, win, win);
        let mut max_variance = f64::NEG_INFINITY;
        let mut visited = 0usize;

        for y in (0..height.saturating_sub(win_usize)).step_by(win_usize) {
            for x in (0..width.saturating_sub(win_usize)).step_by(win_usize) {
                let candidate = Region::new(x as u32, y as u32, win, win);
                let block = image.region_pixels(&candidate);
                let variance = RegionStats::variance_of(&block);
                visited += 1;

                if variance > max_variance {
                    max_variance = variance;
                    best = candidate;
                }
            }
        }

        if visited == 0 {
            tracing::warn!(
                width = image.width(),
                height = image.height(),
                window_size = win,
                "image smaller than scan window; returning fallback region"
            );
        } else {
            tracing::debug!(
                blocks = visited,
                variance = max_variance,
                region = %best,
                "variance scan complete"
            );
        }

        best
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(LocatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(window_size: u32) -> Locator {
        Locator::new(LocatorConfig::with_window_size(window_size))
    }

    #[test]
    fn test_finds_high_variance_block() {
        // Flat image with a textured 2x2 block at (2, 2).
        let image = GrayImage::from_fn(8, 8, |x, y| {
            if (2..4).contains(&x) && (2..4).contains(&y) {
                ((x + y) * 91) as u8
            } else {
                50
            }
        });

        let region = locator(2).locate(&image);
        assert_eq!(region, Region::new(2, 2, 2, 2));
    }

    #[test]
    fn test_tie_keeps_first_in_row_major_order() {
        // Blocks at (0, 0) and (2, 0) carry identical variance; every
        // other visited block is flat. Row-major scan finds (0, 0) first.
        let image = GrayImage::from_fn(8, 8, |x, y| {
            if y < 2 && x < 4 {
                ((x % 2) * 200) as u8
            } else {
                0
            }
        });

        let region = locator(2).locate(&image);
        assert_eq!(region, Region::new(0, 0, 2, 2));
    }

    #[test]
    fn test_trailing_blocks_never_visited() {
        // 8x8 image, window 4: origins range over 0..4 step 4, so only
        // the block at (0, 0) is scanned. The exactly-fitting block at
        // (4, 4) is outside the scan even though it carries all the
        // variance.
        let image = GrayImage::from_fn(8, 8, |x, y| {
            if x >= 4 && y >= 4 {
                ((x * 63) ^ (y * 85)) as u8
            } else {
                10
            }
        });

        let region = locator(4).locate(&image);
        assert_eq!(region, Region::new(0, 0, 4, 4));
    }

    #[test]
    fn test_fallback_for_small_image() {
        // Image smaller than the default 64-sample window in both axes:
        // zero blocks are visited and the documented fallback comes back.
        let image = GrayImage::from_fn(16, 16, |x, y| (x * y) as u8);

        let region = Locator::default().locate(&image);
        assert_eq!(region, Region::new(0, 0, 64, 64));

        // The fallback does not fit this image; consumers must
        // re-validate before use.
        assert!(region.validate(image.width(), image.height()).is_err());
    }
}
