//! Validity mask lookups with ambient absence
//!
//! A data array without a mask behaves exactly like one masked all-false, so
//! the wrappers here default every lookup to `false` instead of synthesizing
//! a dense mask allocation.

use ndarray::{ArrayView1, ArrayView2};

/// Validity mask over a 1D data array
///
/// `true` marks a cell's data as invalid, which excuses discontiguities at
/// the boundaries that cell touches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mask1<'a> {
    cells: Option<ArrayView1<'a, bool>>,
}

impl<'a> Mask1<'a> {
    /// Mask for a plain dense array: nothing is invalid
    pub const fn none() -> Self {
        Self { cells: None }
    }

    /// Wrap a caller-supplied per-cell mask
    pub const fn new(cells: ArrayView1<'a, bool>) -> Self {
        Self { cells: Some(cells) }
    }

    /// Whether the cell at `index` is marked invalid
    ///
    /// Absent masks and out-of-range indices both read as valid; shapes are
    /// checked against the bounds before any scan runs.
    pub fn is_masked(&self, index: usize) -> bool {
        self.cells
            .as_ref()
            .and_then(|cells| cells.get(index))
            .copied()
            .unwrap_or(false)
    }
}

/// Validity mask over a 2D data lattice
#[derive(Debug, Clone, Copy, Default)]
pub struct Mask2<'a> {
    cells: Option<ArrayView2<'a, bool>>,
}

impl<'a> Mask2<'a> {
    /// Mask for a plain dense array: nothing is invalid
    pub const fn none() -> Self {
        Self { cells: None }
    }

    /// Wrap a caller-supplied per-cell mask
    pub const fn new(cells: ArrayView2<'a, bool>) -> Self {
        Self { cells: Some(cells) }
    }

    /// Whether the cell at `(row, col)` is marked invalid
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.cells
            .as_ref()
            .and_then(|cells| cells.get((row, col)))
            .copied()
            .unwrap_or(false)
    }
}
