//! Mathematical fixtures for the algorithm

/// Superposed plane-wave test fields
pub mod plane_waves;
