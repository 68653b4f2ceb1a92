//! Selective ROI Image Encryption Library
//!
//! Encrypts a rectangular region of interest (ROI) inside a grayscale
//! image with a keystream derived from the chaotic logistic map,
//! leaving every pixel outside the ROI untouched. The ROI is chosen
//! manually or detected automatically as the image block with the
//! highest sample variance.
//!
//! # Architecture
//!
//! The pipeline is three pure components:
//!
//! ```text
//! image ──→ locate (optional, variance scan) ──→ region
//!   │                                              │
//!   └──────────────→ cipher ←── keystream ←── ChaosParams
//!                      │
//!                      └──→ transformed image
//! ```
//!
//! # Design Principles
//!
//! - **Involution**: applying the transform twice with identical region
//!   and parameters restores the original image; decryption *is* a
//!   second application
//! - **Copy, never mutate**: every transform returns a new image and
//!   leaves the caller's original intact
//! - **Fail fast on geometry**: out-of-bounds or empty regions are
//!   typed errors, never silent clipping
//! - **No cryptographic claims**: a single XOR pass with a chaotic
//!   keystream scrambles pixels visually; it is not a general-purpose
//!   cipher and resists no known-plaintext attack
//!
//! # Example
//!
//! ```
//! use roi_cipher::{ChaosParams, GrayImage, Locator, RegionCipher};
//!
//! // A synthetic image with a detailed patch for the locator to find.
//! let image = GrayImage::from_fn(256, 256, |x, y| {
//!     if (64..128).contains(&x) && (64..128).contains(&y) {
//!         ((x * 31) ^ (y * 17)) as u8
//!     } else {
//!         ((x + y) / 4) as u8
//!     }
//! });
//!
//! // Detect the region of interest automatically.
//! let region = Locator::default().locate(&image);
//! region.validate(image.width(), image.height()).unwrap();
//!
//! // Encrypt, then decrypt with the identical call.
//! let cipher = RegionCipher::new(ChaosParams { r: 3.99, x0: 0.5 });
//! let encrypted = cipher.apply(&image, &region).unwrap();
//! let decrypted = cipher.apply(&encrypted, &region).unwrap();
//!
//! assert_ne!(encrypted, image);
//! assert_eq!(decrypted, image);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod cipher;
pub mod config;
pub mod image;
pub mod keystream;
pub mod locate;

// Re-export commonly used types at crate root
pub use analysis::RegionStats;
pub use cipher::RegionCipher;
pub use config::{ConfigError, FileConfig};
pub use image::{GrayImage, ImageError, Region, RegionError};
pub use keystream::{ChaosParams, LogisticMap, ParamsError};
pub use locate::{Locator, LocatorConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
