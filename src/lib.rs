//! Two-dimensional Burg lattice prediction-error filters for sampled images
//!
//! The order-recursive lattice adds one causal neighbor per order and
//! alternates between the two axes. At each order it derives a reflection
//! coefficient from the forward and backward error energies and then
//! rewrites both error fields. Two causal quadrants are provided and a
//! cascade applies them one after the other.

#![deny(unsafe_code)]

/// Lattice recursion, causality directions and the stage cascade
pub mod algorithm;
/// Field statistics for reporting and display ranges
pub mod analysis;
/// Command-line driver, configuration, errors and image output
pub mod io;
/// Synthetic test fields
pub mod math;
/// Field construction and valid-region geometry
pub mod spatial;

pub use algorithm::cascade::{Cascade, CascadeResult};
pub use algorithm::direction::Direction;
pub use algorithm::lattice::{Prediction, predict};
pub use io::error::{BurgError, Result};
