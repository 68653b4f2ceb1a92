//! The region transform itself.

use crate::image::{GrayImage, Region, RegionError};
use crate::keystream::{self, ChaosParams};

/// XORs a region of an image against a chaotic keystream.
///
/// The cipher holds only its seed parameters and carries no state
/// between calls, so a single instance may be reused across images.
/// Because the transform is an involution, decryption is just a second
/// [`apply`] with the same region and parameters:
///
/// ```
/// use roi_cipher::{ChaosParams, GrayImage, Region, RegionCipher};
///
/// let image = GrayImage::from_fn(32, 32, |x, y| ((x * 7) ^ (y * 13)) as u8);
/// let region = Region::new(4, 4, 16, 16);
/// let cipher = RegionCipher::new(ChaosParams::default());
///
/// let encrypted = cipher.apply(&image, &region).unwrap();
/// let decrypted = cipher.apply(&encrypted, &region).unwrap();
/// assert_eq!(decrypted, image);
/// ```
///
/// [`apply`]: RegionCipher::apply
#[derive(Debug, Clone)]
pub struct RegionCipher {
    params: ChaosParams,
}

impl RegionCipher {
    /// Creates a cipher with the given seed parameters.
    ///
    /// Parameters are accepted as-is; see [`ChaosParams::validate`] for
    /// the policy check that keeps them in the chaotic band.
    pub fn new(params: ChaosParams) -> Self {
        Self { params }
    }

    /// Returns the seed parameters.
    #[inline]
    pub fn params(&self) -> &ChaosParams {
        &self.params
    }

    /// Applies the XOR transform to `region` of `image`.
    ///
    /// Fails fast when the region is empty or extends past the image;
    /// out-of-bounds regions are never clipped. On success the input is
    /// left untouched and a transformed copy is returned.
    pub fn apply(&self, image: &GrayImage, region: &Region) -> Result<GrayImage, RegionError> {
        region.validate(image.width(), image.height())?;

        // Extraction and keystream are paired row-major; this ordering
        // is what makes the second application undo the first.
        let mut samples = image.region_pixels(region);
        let key = keystream::generate(samples.len(), &self.params);
        for (sample, k) in samples.iter_mut().zip(&key) {
            *sample ^= k;
        }

        tracing::debug!(
            region = %region,
            bytes = samples.len(),
            "region transformed"
        );

        Ok(image.with_region(region, &samples))
    }
}
