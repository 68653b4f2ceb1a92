//! Scrambling-quality statistics.
//!
//! This module provides sanity metrics over sample slices: how much a
//! region varies before encryption, and how uniform its histogram looks
//! afterwards. These are quality indicators, not cryptographic proofs.

mod statistics;

pub use statistics::RegionStats;
