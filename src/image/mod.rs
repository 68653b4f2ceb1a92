//! Grayscale image grid and region geometry.
//!
//! This module provides the raster types the rest of the crate operates
//! on. Decoding from and encoding to file formats is deliberately left
//! to the surrounding application; the core only ever sees an
//! already-decoded grid of byte samples.

mod grid;
mod region;

pub use grid::{GrayImage, ImageError};
pub use region::{Region, RegionError};
