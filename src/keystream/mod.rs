//! Chaotic keystream generation via the logistic map.
//!
//! This module turns two real-valued seed parameters into a
//! deterministic pseudorandom byte sequence. The sequence is ephemeral:
//! it is generated fresh per call and never cached, since identical
//! parameters always reproduce the identical stream.

mod logistic;
mod params;

pub use logistic::{generate, LogisticMap};
pub use params::{ChaosParams, ParamsError};
