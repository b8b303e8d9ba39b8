//! Order-recursive two-dimensional lattice (Burg) predictor
//!
//! Each order runs in two phases over the valid region. The correlation
//! phase sums `ff`, `bb` and `fb` from the current forward field and a
//! snapshot of the backward neighbors. The update phase then rewrites both
//! fields from that same snapshot. No cell is written before every sum for
//! the order is complete.

use std::fmt;

use ndarray::{Array2, ArrayView2, Zip};
use num_traits::Float;
use tracing::{debug, trace};

use crate::algorithm::direction::{Direction, OrderStep};
use crate::io::error::Result;
use crate::spatial::field::{dimensions, validate_field};
use crate::spatial::region::Region;

/// Floating-point sample type accepted by the lattice
pub trait Sample: Float + fmt::Debug {}

impl<T: Float + fmt::Debug> Sample for T {}

/// Running correlation sums over one order's valid region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSums<T> {
    /// Forward energy `Σ f²`
    pub ff: T,
    /// Backward neighbor energy `Σ b(nbr)²`
    pub bb: T,
    /// Cross term `Σ f·b(nbr)`
    pub fb: T,
}

impl<T: Sample> CorrelationSums<T> {
    /// Sums of an empty region
    pub fn zero() -> Self {
        Self {
            ff: T::zero(),
            bb: T::zero(),
            fb: T::zero(),
        }
    }

    /// Accumulate over paired cell and neighbor windows of equal shape
    pub fn accumulate(cells: &ArrayView2<'_, T>, neighbors: &ArrayView2<'_, T>) -> Self {
        Zip::from(cells)
            .and(neighbors)
            .fold(Self::zero(), |acc, &fk, &bk| Self {
                ff: fk.mul_add(fk, acc.ff),
                bb: bk.mul_add(bk, acc.bb),
                fb: fk.mul_add(bk, acc.fb),
            })
    }

    /// Combined energy `ff + bb`
    pub fn denominator(&self) -> T {
        self.ff + self.bb
    }

    /// Reflection coefficient `2·fb / (ff + bb)`
    ///
    /// A zero-energy region yields a null coefficient rather than NaN.
    pub fn reflection_coefficient(&self) -> T {
        let denominator = self.denominator();
        if denominator.is_zero() {
            T::zero()
        } else {
            (self.fb + self.fb) / denominator
        }
    }
}

/// Record of one completed lattice order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport<T> {
    /// Neighbor geometry used at this order
    pub step: OrderStep,
    /// Valid region, or `None` when it was empty
    pub region: Option<Region>,
    /// Correlation sums taken before the update
    pub sums: CorrelationSums<T>,
    /// Reflection coefficient applied at this order
    pub coefficient: T,
}

/// Output of a directional lattice run
#[derive(Debug, Clone)]
pub struct Prediction<T> {
    direction: Direction,
    forward: Array2<T>,
    reports: Vec<OrderReport<T>>,
}

impl<T: Sample> Prediction<T> {
    /// Causality direction used
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Final forward-error field
    pub const fn forward(&self) -> &Array2<T> {
        &self.forward
    }

    /// Consume the prediction, keeping only the forward-error field
    pub fn into_forward(self) -> Array2<T> {
        self.forward
    }

    /// Reflection coefficients in increasing order
    pub fn coefficients(&self) -> Vec<T> {
        self.reports.iter().map(|report| report.coefficient).collect()
    }

    /// Per-order diagnostics
    pub fn reports(&self) -> &[OrderReport<T>] {
        &self.reports
    }

    /// Number of orders applied
    pub fn order(&self) -> usize {
        self.reports.len()
    }
}

/// Stepwise lattice state owning the forward and backward error fields
///
/// Both fields start as copies of the input. Each call to
/// [`Lattice::advance`] applies one more order.
#[derive(Debug, Clone)]
pub struct Lattice<T> {
    direction: Direction,
    forward: Array2<T>,
    backward: Array2<T>,
    reports: Vec<OrderReport<T>>,
}

impl<T: Sample> Lattice<T> {
    /// Prepare a lattice over `input`
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if either dimension of `input` is zero
    pub fn new(input: &ArrayView2<'_, T>, direction: Direction) -> Result<Self> {
        validate_field(input)?;
        Ok(Self {
            direction,
            forward: input.to_owned(),
            backward: input.to_owned(),
            reports: Vec::new(),
        })
    }

    /// Causality direction of this lattice
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of orders applied so far
    pub fn order(&self) -> usize {
        self.reports.len()
    }

    /// Current forward-error field
    pub fn forward(&self) -> ArrayView2<'_, T> {
        self.forward.view()
    }

    /// Current backward-error field
    pub fn backward(&self) -> ArrayView2<'_, T> {
        self.backward.view()
    }

    /// Apply the next order and return its report
    pub fn advance(&mut self) -> OrderReport<T> {
        let step = self.direction.step(self.reports.len());
        let region = Region::locate(self.direction, &step, dimensions(&self.forward.view()));

        let (sums, coefficient) = match &region {
            Some(region) => {
                let neighbors = region.neighbors_of(self.backward.view()).to_owned();
                let cells = region.cells_of(self.forward.view());
                let sums = CorrelationSums::accumulate(&cells, &neighbors.view());
                let coefficient = sums.reflection_coefficient();
                let reflect = -coefficient;

                Zip::from(region.cells_of_mut(self.forward.view_mut()))
                    .and(region.cells_of_mut(self.backward.view_mut()))
                    .and(&neighbors)
                    .for_each(|f, b, &bk| {
                        let fk = *f;
                        *f = reflect.mul_add(bk, fk);
                        *b = reflect.mul_add(fk, bk);
                    });

                trace!(cells = region.len(), "lattice region updated");
                (sums, coefficient)
            }
            None => (CorrelationSums::zero(), T::zero()),
        };

        debug!(
            direction = %self.direction,
            order = step.order + 1,
            denominator = ?sums.denominator(),
            coefficient = ?coefficient,
            "reflection coefficient"
        );

        let report = OrderReport {
            step,
            region,
            sums,
            coefficient,
        };
        self.reports.push(report.clone());
        report
    }

    /// Drop the backward field and return the accumulated result
    pub fn finish(self) -> Prediction<T> {
        Prediction {
            direction: self.direction,
            forward: self.forward,
            reports: self.reports,
        }
    }
}

/// Run `order` lattice orders on `input` in the given direction
///
/// Orders past the point where the valid region vanishes contribute zero
/// coefficients and leave the fields unchanged.
///
/// # Errors
///
/// Returns `InvalidField` if either dimension of `input` is zero
pub fn predict<T: Sample>(
    input: &ArrayView2<'_, T>,
    order: usize,
    direction: Direction,
) -> Result<Prediction<T>> {
    let mut lattice = Lattice::new(input, direction)?;
    for _ in 0..order {
        lattice.advance();
    }
    Ok(lattice.finish())
}
