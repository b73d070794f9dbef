//! Adjacency scan over a 2D lattice of cell corner bounds
//!
//! Adjacency is evaluated independently along the two grid axes: a pass over
//! column-adjacent cell pairs, then a pass over row-adjacent pairs. Each pair
//! shares two corner values across its boundary and both must meet within
//! tolerance for the boundary to be contiguous.

use ndarray::{ArrayView1, ArrayView3};
use num_traits::Float;

use crate::check::predicate::edges_meet;
use crate::error::BoundaryLocation;
use crate::geometry::Mask2;
use crate::geometry::bounds::{BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT};

/// Scan every boundary between adjacent cells in both grid axes
///
/// A discontiguous boundary is excused when either of its two neighboring
/// cells is masked invalid. Returns every unexcused discontiguous boundary,
/// column-adjacent pairs first; an empty list is a pass.
pub fn scan<F: Float>(
    corners: &ArrayView3<'_, F>,
    mask: &Mask2<'_>,
    atol: F,
) -> Vec<BoundaryLocation> {
    let mut offending = Vec::new();

    // Boundaries between cells (r, c) and (r, c + 1): the left cell's right
    // edge corners against the right cell's left edge corners.
    for (r, row) in corners.outer_iter().enumerate() {
        let cells = row.outer_iter();
        let next_cells = row.outer_iter().skip(1);

        for (c, (cell, next)) in cells.zip(next_cells).enumerate() {
            let touching = corners_meet(&cell, BOTTOM_RIGHT, &next, BOTTOM_LEFT, atol)
                && corners_meet(&cell, TOP_RIGHT, &next, TOP_LEFT, atol);

            if !touching && !(mask.is_masked(r, c) || mask.is_masked(r, c + 1)) {
                offending.push(BoundaryLocation::AlongRow { row: r, col: c });
            }
        }
    }

    // Boundaries between cells (r, c) and (r + 1, c): the lower cell's top
    // edge corners against the upper cell's bottom edge corners.
    let rows = corners.outer_iter();
    let next_rows = corners.outer_iter().skip(1);

    for (r, (row, next_row)) in rows.zip(next_rows).enumerate() {
        for (c, (cell, above)) in row.outer_iter().zip(next_row.outer_iter()).enumerate() {
            let touching = corners_meet(&cell, TOP_LEFT, &above, BOTTOM_LEFT, atol)
                && corners_meet(&cell, TOP_RIGHT, &above, BOTTOM_RIGHT, atol);

            if !touching && !(mask.is_masked(r, c) || mask.is_masked(r + 1, c)) {
                offending.push(BoundaryLocation::AlongColumn { row: r, col: c });
            }
        }
    }

    offending
}

/// Compare one shared corner pair across a cell boundary
fn corners_meet<F: Float>(
    cell: &ArrayView1<'_, F>,
    corner: usize,
    other: &ArrayView1<'_, F>,
    other_corner: usize,
    atol: F,
) -> bool {
    // Trailing dimension is validated to 4 before the scan runs.
    match (cell.get(corner), other.get(other_corner)) {
        (Some(&a), Some(&b)) => edges_meet(a, b, atol),
        _ => true,
    }
}
