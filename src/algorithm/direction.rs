//! Causality directions and the per-order margin/offset rule
//!
//! Each order adds one causal neighbor, alternating between the two axes.
//! The axis that leads gets its neighbor first (at even orders) and its
//! margin grows first; the trailing axis follows one order later.

use std::fmt;

/// Which way a causal neighbor lies along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Neighbor toward smaller indices; the margin trims the leading edge
    Backward,
    /// Neighbor toward larger indices; the margin trims the trailing edge
    Forward,
}

/// Quadrant of the neighborhood treated as already known
///
/// Axis 1 is the fast axis (columns), axis 2 the slow axis (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Neighbors at smaller indices on both axes; axis 1 leads
    NorthWest,
    /// Neighbors at smaller axis-1 and larger axis-2 indices; axis 2 leads
    SouthWest,
}

/// Neighbor geometry for a single lattice order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStep {
    /// Zero-based order index `k`
    pub order: usize,
    /// Samples excluded at the causal edge of each axis, `[k1, k2]`
    pub margin: [usize; 2],
    /// Neighbor distance along each axis, `[j1, j2]`, each 0 or 1
    pub offset: [usize; 2],
}

impl Direction {
    /// Both implemented directions, in cascade order
    pub const ALL: [Self; 2] = [Self::NorthWest, Self::SouthWest];

    /// Derive margins and neighbor offsets for order `k`
    pub const fn step(self, k: usize) -> OrderStep {
        let lead_margin = (k + 2) / 2;
        let trail_margin = (k + 1) / 2;
        let lead_offset = (k + 1) % 2;
        let trail_offset = k % 2;

        let (margin, offset) = match self {
            Self::NorthWest => (
                [lead_margin, trail_margin],
                [lead_offset, trail_offset],
            ),
            Self::SouthWest => (
                [trail_margin, lead_margin],
                [trail_offset, lead_offset],
            ),
        };

        OrderStep {
            order: k,
            margin,
            offset,
        }
    }

    /// Neighbor reach along `[axis 1, axis 2]`
    pub const fn reach(self) -> [Reach; 2] {
        match self {
            Self::NorthWest => [Reach::Backward, Reach::Backward],
            Self::SouthWest => [Reach::Backward, Reach::Forward],
        }
    }

    /// Short lowercase name used in logs and progress output
    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthWest => "north-west",
            Self::SouthWest => "south-west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
