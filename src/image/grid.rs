//! Grayscale image type backed by a flat row-major sample buffer.

use super::Region;
use thiserror::Error;

/// Errors raised when constructing an image.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImageError {
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferMismatch {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },
}

/// A single-channel (grayscale) image.
///
/// Samples are `u8`, stored row-major. The buffer length is checked at
/// construction, so every `GrayImage` in circulation is internally
/// consistent. All transforms in this crate return a new image rather
/// than mutating the input, keeping the caller's original valid for
/// later inverse verification.
#[derive(Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Row-major sample data.
    pixels: Vec<u8>,
    /// Image width in samples.
    width: u32,
    /// Image height in samples.
    height: u32,
}

impl GrayImage {
    /// Creates an image from a row-major sample buffer.
    ///
    /// Fails fast when the buffer length does not match the dimensions.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, ImageError> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(ImageError::BufferMismatch {
                expected,
                actual: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Builds an image by evaluating `f(x, y)` for every sample.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw row-major sample data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "pixel index out of bounds");
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Extracts the samples addressed by `region`, row-major.
    ///
    /// The region must already have been validated against this image's
    /// dimensions; see [`Region::validate`].
    pub fn region_pixels(&self, region: &Region) -> Vec<u8> {
        debug_assert!(region.validate(self.width, self.height).is_ok());

        let (x, y) = (region.x as usize, region.y as usize);
        let (w, h) = (region.w as usize, region.h as usize);
        let stride = self.width as usize;

        let mut out = Vec::with_capacity(w * h);
        for row in y..y + h {
            let start = row * stride + x;
            out.extend_from_slice(&self.pixels[start..start + w]);
        }
        out
    }

    /// Returns a copy of this image with `region` overwritten by
    /// `samples` (row-major, length `region.area()`).
    ///
    /// The region must already have been validated against this image.
    pub(crate) fn with_region(&self, region: &Region, samples: &[u8]) -> Self {
        debug_assert!(region.validate(self.width, self.height).is_ok());
        debug_assert_eq!(samples.len(), region.area());

        let (x, y) = (region.x as usize, region.y as usize);
        let (w, h) = (region.w as usize, region.h as usize);
        let stride = self.width as usize;

        let mut pixels = self.pixels.clone();
        for (i, row) in (y..y + h).enumerate() {
            let start = row * stride + x;
            pixels[start..start + w].copy_from_slice(&samples[i * w..(i + 1) * w]);
        }

        Self {
            pixels,
            width: self.width,
            height: self.height,
        }
    }
}

impl std::fmt::Debug for GrayImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrayImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}
