//! Sequential composition of directional lattice stages
//!
//! Every stage consumes the forward-error field of the one before it, so the
//! residual is whitened against each causal neighborhood in turn.

use ndarray::{Array2, ArrayView2};
use tracing::info_span;

use crate::algorithm::direction::Direction;
use crate::algorithm::lattice::{Lattice, OrderReport, Prediction, Sample};
use crate::io::error::Result;
use crate::spatial::field::validate_field;

/// Hooks invoked while a cascade runs
///
/// All methods default to doing nothing.
pub trait CascadeObserver<T> {
    /// A stage is about to apply `order` orders in `direction`
    fn stage_started(&mut self, _stage: usize, _direction: Direction, _order: usize) {}

    /// One order of `stage` has been applied
    fn order_completed(&mut self, _stage: usize, _report: &OrderReport<T>) {}

    /// `stage` has finished
    fn stage_completed(&mut self, _stage: usize, _prediction: &Prediction<T>) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<T> CascadeObserver<T> for Silent {}

/// Ordered list of lattice stages sharing one filter order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade {
    order: usize,
    directions: Vec<Direction>,
}

impl Cascade {
    /// North-west stage followed by south-west stage
    pub fn new(order: usize) -> Self {
        Self::with_directions(order, Direction::ALL.to_vec())
    }

    /// Cascade running `directions` in the given sequence
    pub const fn with_directions(order: usize, directions: Vec<Direction>) -> Self {
        Self { order, directions }
    }

    /// Orders applied by every stage
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Stage directions in execution order
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Run every stage on `input`
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if either dimension of `input` is zero
    pub fn apply<T: Sample>(&self, input: &ArrayView2<'_, T>) -> Result<CascadeResult<T>> {
        self.apply_observed(input, &mut Silent)
    }

    /// Run every stage on `input`, reporting progress to `observer`
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if either dimension of `input` is zero
    pub fn apply_observed<T, O>(
        &self,
        input: &ArrayView2<'_, T>,
        observer: &mut O,
    ) -> Result<CascadeResult<T>>
    where
        T: Sample,
        O: CascadeObserver<T> + ?Sized,
    {
        validate_field(input)?;

        let mut stages: Vec<Prediction<T>> = Vec::with_capacity(self.directions.len());
        let mut current = input.to_owned();

        for (stage, &direction) in self.directions.iter().enumerate() {
            let _stage_span = info_span!("stage", index = stage + 1, %direction).entered();
            observer.stage_started(stage, direction, self.order);

            let mut lattice = Lattice::new(&current.view(), direction)?;
            for _ in 0..self.order {
                let report = lattice.advance();
                observer.order_completed(stage, &report);
            }

            let prediction = lattice.finish();
            observer.stage_completed(stage, &prediction);
            current.assign(prediction.forward());
            stages.push(prediction);
        }

        Ok(CascadeResult {
            input: input.to_owned(),
            stages,
        })
    }
}

/// Input field and per-stage predictions of a cascade run
#[derive(Debug, Clone)]
pub struct CascadeResult<T> {
    input: Array2<T>,
    stages: Vec<Prediction<T>>,
}

impl<T: Sample> CascadeResult<T> {
    /// Field the cascade started from
    pub const fn input(&self) -> &Array2<T> {
        &self.input
    }

    /// Predictions in stage order
    pub fn stages(&self) -> &[Prediction<T>] {
        &self.stages
    }

    /// Forward-error field of the final stage, or the input when there are no stages
    pub fn output(&self) -> &Array2<T> {
        self.stages
            .last()
            .map_or(&self.input, |prediction| prediction.forward())
    }
}
