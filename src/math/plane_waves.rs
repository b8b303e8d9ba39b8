//! Synthetic test fields built from superposed plane waves
//!
//! The waves share one propagation angle and have uniformly spaced
//! wavenumbers `spacing, 2·spacing, ..., count·spacing`.

use std::f64::consts::PI;

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::lattice::Sample;
use crate::io::configuration::{PLANE_WAVE_BANDWIDTH, PLANE_WAVE_COUNT};
use crate::io::error::{Result, invalid_field, invalid_parameter};

/// Seeded uniform noise added on top of the waves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Noise {
    /// Samples are drawn from `[-amplitude, amplitude]`
    pub amplitude: f64,
    /// Random seed
    pub seed: u64,
}

/// Plane-wave field generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneWaves {
    /// Number of superposed waves
    pub count: usize,
    /// Wavenumber increment in radians per sample
    pub spacing: f64,
    /// Propagation angle in degrees, measured from axis 1 toward axis 2
    pub theta_degrees: f64,
    /// Optional additive noise
    pub noise: Option<Noise>,
}

impl PlaneWaves {
    /// Reference fixture: ten waves covering `0.4π` at angle `theta_degrees`
    pub fn new(theta_degrees: f64) -> Self {
        Self {
            count: PLANE_WAVE_COUNT,
            spacing: PLANE_WAVE_BANDWIDTH * PI / PLANE_WAVE_COUNT as f64,
            theta_degrees,
            noise: None,
        }
    }

    /// Add seeded uniform noise of the given amplitude
    pub const fn with_noise(mut self, amplitude: f64, seed: u64) -> Self {
        self.noise = Some(Noise { amplitude, seed });
        self
    }

    /// Sample the waves on an `n1` x `n2` grid
    ///
    /// Coordinates are centred on `(n1/2, n2/2)` using integer halves, and
    /// the fast-axis coordinate is shifted by one sample on the far side of
    /// the slow-axis centre.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - The noise amplitude is negative or not finite
    pub fn render<T: Sample>(&self, n1: usize, n2: usize) -> Result<Array2<T>> {
        if n1 == 0 || n2 == 0 {
            return Err(invalid_field(&format!(
                "field dimensions must be positive (n1={n1}, n2={n2})"
            )));
        }

        let theta = self.theta_degrees.to_radians();
        let (st, ct) = theta.sin_cos();
        let centre = [(n1 / 2) as f64, (n2 / 2) as f64];

        let mut field = Array2::from_shape_fn((n2, n1), |(i2, i1)| {
            let x2 = i2 as f64 - centre[1];
            let mut x1 = i1 as f64 - centre[0];
            if x2 > 0.0 {
                x1 += 1.0;
            }
            let phase = ct.mul_add(x1, st * x2);
            (1..=self.count)
                .map(|ik| (self.spacing * ik as f64 * phase).cos())
                .sum::<f64>()
        });

        if let Some(noise) = self.noise {
            if !noise.amplitude.is_finite() || noise.amplitude < 0.0 {
                return Err(invalid_parameter(
                    "noise",
                    &noise.amplitude,
                    &"amplitude must be finite and non-negative",
                ));
            }
            let mut rng = StdRng::seed_from_u64(noise.seed);
            for value in &mut field {
                *value += rng.random_range(-noise.amplitude..=noise.amplitude);
            }
        }

        Ok(field.mapv(|value| T::from(value).unwrap_or_else(T::nan)))
    }
}
