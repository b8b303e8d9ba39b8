//! Summary statistics for sample fields
//!
//! Used to report the effect of each cascade stage and to pick the
//! symmetric display range when rendering.

use ndarray::ArrayView2;

use crate::algorithm::lattice::Sample;

/// Extremes and energy of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary<T> {
    /// Smallest sample
    pub min: T,
    /// Largest sample
    pub max: T,
    /// Sum of squared samples
    pub energy: T,
    /// Number of samples
    pub samples: usize,
}

impl<T: Sample> FieldSummary<T> {
    /// Summarize `field`; an empty field summarizes to zeros
    pub fn of(field: &ArrayView2<'_, T>) -> Self {
        if field.is_empty() {
            return Self {
                min: T::zero(),
                max: T::zero(),
                energy: T::zero(),
                samples: 0,
            };
        }

        let (min, max, energy) = field.iter().fold(
            (T::infinity(), T::neg_infinity(), T::zero()),
            |(min, max, energy), &value| (min.min(value), max.max(value), value.mul_add(value, energy)),
        );

        Self {
            min,
            max,
            energy,
            samples: field.len(),
        }
    }

    /// Half-width of the symmetric display range, `max(|min|, |max|)`
    pub fn clip(&self) -> T {
        self.min.abs().max(self.max.abs())
    }

    /// Root-mean-square sample value
    pub fn rms(&self) -> T {
        T::from(self.samples).map_or_else(T::zero, |count| {
            if count.is_zero() {
                T::zero()
            } else {
                (self.energy / count).sqrt()
            }
        })
    }
}

/// Symmetric clip of `field`, see [`FieldSummary::clip`]
pub fn symmetric_clip<T: Sample>(field: &ArrayView2<'_, T>) -> T {
    FieldSummary::of(field).clip()
}

/// Ratio of output energy to input energy
///
/// Returns `None` when the input carries no energy.
pub fn energy_ratio<T: Sample>(before: &ArrayView2<'_, T>, after: &ArrayView2<'_, T>) -> Option<T> {
    let input = FieldSummary::of(before).energy;
    (!input.is_zero()).then(|| FieldSummary::of(after).energy / input)
}
