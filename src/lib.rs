//! Discrete Gaussian blur kernel for a 5x5 neighborhood.
//!
//! The kernel is assumed to have the full symmetry of the square, so only six
//! cells are evaluated (see [`SAMPLES`]); each stands in for every cell of its
//! symmetry class, and the class sizes (multiplicities) weight the
//! normalization sum so that the expanded kernel sums to one.

#![recursion_limit = "1024"]

// serialization
#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate serde_json;

// errors
#[macro_use]
extern crate error_chain;

// logging
#[macro_use]
extern crate log;

pub mod errors;
pub use errors::*;

pub mod config;
pub use config::Config;

pub mod sample;
pub use sample::{Offset, Sample, SAMPLES};

pub mod density;
pub use density::evaluate_density;

pub mod kernel;
pub use kernel::{Kernel, Weight, compute_raw_table, normalize};

pub mod report;
pub use report::Format;
