//! Spatial data structures and grid geometry
//!
//! This module contains spatial-related functionality including:
//! - Field construction, validation and reorientation
//! - Valid-region windows for each lattice order

/// Field construction and reorientation
pub mod field;
/// Valid-region and neighbor windows
pub mod region;

pub use region::Region;
