//! Cell boundary geometry resolved to a tagged 1D/2D variant
//!
//! The dimensionality of a coordinate's bounds is decided exactly once, when
//! the caller's array is converted into [`Bounds`]. The scanners downstream
//! never inspect shapes again.

use ndarray::{ArrayView2, ArrayView3, ArrayViewD, Ix2, Ix3};
use num_traits::Float;

use crate::error::{ContiguityError, Result, shape_mismatch};

/// Corner index of a cell's bottom-left corner in 2D bounds
pub const BOTTOM_LEFT: usize = 0;
/// Corner index of a cell's bottom-right corner in 2D bounds
pub const BOTTOM_RIGHT: usize = 1;
/// Corner index of a cell's top-right corner in 2D bounds
pub const TOP_RIGHT: usize = 2;
/// Corner index of a cell's top-left corner in 2D bounds
pub const TOP_LEFT: usize = 3;

/// Cell boundary geometry for a 1D or 2D coordinate
///
/// Both variants borrow the caller's array for the duration of one check;
/// nothing is copied.
#[derive(Debug, Clone, Copy)]
pub enum Bounds<'a, F: Float> {
    /// 1D coordinate of N cells: shape `(N, 2)`, one `(lower, upper)` edge
    /// pair per cell, ordered as the coordinate's points
    OneDim(ArrayView2<'a, F>),

    /// 2D coordinate over an R x C lattice: shape `(R, C, 4)`, four corner
    /// values per cell ordered bottom-left, bottom-right, top-right, top-left
    TwoDim(ArrayView3<'a, F>),
}

impl<'a, F: Float> Bounds<'a, F> {
    /// Wrap a `(N, 2)` array of per-cell edge pairs as 1D bounds
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the trailing dimension is not 2.
    pub fn from_cell_edges(edges: ArrayView2<'a, F>) -> Result<Self> {
        if edges.ncols() != 2 {
            return Err(shape_mismatch(
                "bounds",
                &[edges.nrows(), 2],
                edges.shape(),
            ));
        }
        Ok(Self::OneDim(edges))
    }

    /// Wrap a `(R, C, 4)` array of per-cell corner values as 2D bounds
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the trailing dimension is not 4.
    pub fn from_cell_corners(corners: ArrayView3<'a, F>) -> Result<Self> {
        let (rows, cols, per_cell) = corners.dim();
        if per_cell != 4 {
            return Err(shape_mismatch("bounds", &[rows, cols, 4], corners.shape()));
        }
        Ok(Self::TwoDim(corners))
    }

    /// Resolve a dynamic-rank bounds array into the matching variant
    ///
    /// A rank-2 view is treated as 1D cell edges and a rank-3 view as 2D cell
    /// corners; anything else is an unsupported coordinate rank.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedRank` if the view is neither rank 2 nor rank 3,
    /// and `ShapeMismatch` if the trailing dimension is not 2 (1D) or 4 (2D).
    pub fn from_dyn(bounds: ArrayViewD<'a, F>) -> Result<Self> {
        match bounds.ndim() {
            2 => {
                let edges = bounds
                    .into_dimensionality::<Ix2>()
                    .map_err(|_| ContiguityError::UnsupportedRank { rank: 1 })?;
                Self::from_cell_edges(edges)
            }
            3 => {
                let corners = bounds
                    .into_dimensionality::<Ix3>()
                    .map_err(|_| ContiguityError::UnsupportedRank { rank: 2 })?;
                Self::from_cell_corners(corners)
            }
            ndim => Err(ContiguityError::UnsupportedRank {
                rank: ndim.saturating_sub(1),
            }),
        }
    }

    /// Coordinate rank described by these bounds (1 or 2)
    pub const fn rank(&self) -> usize {
        match self {
            Self::OneDim(_) => 1,
            Self::TwoDim(_) => 2,
        }
    }

    /// Shape of the cell lattice the data array must match
    ///
    /// `[N]` for 1D bounds, `[R, C]` for 2D bounds.
    pub fn cell_shape(&self) -> Vec<usize> {
        match self {
            Self::OneDim(edges) => vec![edges.nrows()],
            Self::TwoDim(corners) => {
                let (rows, cols, _) = corners.dim();
                vec![rows, cols]
            }
        }
    }
}
