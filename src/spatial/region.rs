//! Valid-region geometry for one lattice order
//!
//! The valid region holds every cell whose causal neighbor also lies inside
//! the grid. It is described as a pair of equally sized windows: one over
//! the cells themselves and one over their neighbors.

use std::ops::Range;

use ndarray::{ArrayView2, ArrayViewMut2, s};

use crate::algorithm::direction::{Direction, OrderStep, Reach};

/// Cell and neighbor windows for one order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Cell index ranges along `[axis 1, axis 2]`
    pub cells: [Range<usize>; 2],
    /// Neighbor index ranges along `[axis 1, axis 2]`
    pub neighbors: [Range<usize>; 2],
}

// Ranges along one axis, or None when the margin consumes the whole axis
fn axis_windows(
    reach: Reach,
    margin: usize,
    offset: usize,
    len: usize,
) -> Option<(Range<usize>, Range<usize>)> {
    if margin >= len {
        return None;
    }
    match reach {
        Reach::Backward => Some((margin..len, margin - offset..len - offset)),
        Reach::Forward => Some((0..len - margin, offset..len - margin + offset)),
    }
}

impl Region {
    /// Locate the valid region of `step` on an `n1` x `n2` grid
    ///
    /// Returns `None` when the region is empty.
    pub fn locate(direction: Direction, step: &OrderStep, (n1, n2): (usize, usize)) -> Option<Self> {
        let [reach1, reach2] = direction.reach();
        let (cells1, neighbors1) = axis_windows(reach1, step.margin[0], step.offset[0], n1)?;
        let (cells2, neighbors2) = axis_windows(reach2, step.margin[1], step.offset[1], n2)?;

        Some(Self {
            cells: [cells1, cells2],
            neighbors: [neighbors1, neighbors2],
        })
    }

    /// Number of cells in the region
    pub fn len(&self) -> usize {
        self.cells[0].len() * self.cells[1].len()
    }

    /// Whether the region holds no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View of the region's cells in `field`
    pub fn cells_of<'a, T>(&self, field: ArrayView2<'a, T>) -> ArrayView2<'a, T> {
        field.slice_move(s![self.cells[1].clone(), self.cells[0].clone()])
    }

    /// Mutable view of the region's cells in `field`
    pub fn cells_of_mut<'a, T>(&self, field: ArrayViewMut2<'a, T>) -> ArrayViewMut2<'a, T> {
        field.slice_move(s![self.cells[1].clone(), self.cells[0].clone()])
    }

    /// View of the causal neighbors of the region's cells in `field`
    pub fn neighbors_of<'a, T>(&self, field: ArrayView2<'a, T>) -> ArrayView2<'a, T> {
        field.slice_move(s![self.neighbors[1].clone(), self.neighbors[0].clone()])
    }
}
