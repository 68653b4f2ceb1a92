//! Region-masked XOR transform.
//!
//! Combines a region of an image with a logistic-map keystream via
//! exclusive-or. XOR is self-inverse and the keystream is
//! deterministic, so applying the transform a second time with the same
//! region and parameters restores the original image exactly. One
//! operation serves as both encryption and decryption.

mod transform;

pub use transform::RegionCipher;
