//! Analysis of filtered fields

/// Extremes, energy and display clipping of fields
pub mod statistics;
