//! Adjacency scan over 1D cell edge pairs

use ndarray::ArrayView2;
use num_traits::Float;

use crate::check::predicate::edges_meet;
use crate::error::BoundaryLocation;
use crate::geometry::Mask1;

/// Scan every boundary between consecutive cells
///
/// The boundary between cell `i` and cell `i + 1` compares cell `i`'s upper
/// edge against cell `i + 1`'s lower edge. A discontiguous boundary is
/// excused when either neighboring cell is masked invalid. Returns every
/// unexcused discontiguous boundary in scan order; an empty list is a pass.
pub fn scan<F: Float>(
    edges: &ArrayView2<'_, F>,
    mask: &Mask1<'_>,
    atol: F,
) -> Vec<BoundaryLocation> {
    let mut offending = Vec::new();

    let cells = edges.outer_iter();
    let next_cells = edges.outer_iter().skip(1);

    for (i, (cell, next)) in cells.zip(next_cells).enumerate() {
        // Trailing dimension is validated to 2 before the scan runs.
        let (Some(&upper), Some(&lower)) = (cell.get(1), next.get(0)) else {
            continue;
        };

        if edges_meet(upper, lower, atol) {
            continue;
        }

        if mask.is_masked(i) || mask.is_masked(i + 1) {
            continue;
        }

        offending.push(BoundaryLocation::Between {
            left: i,
            right: i + 1,
        });
    }

    offending
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_contiguous_edges_produce_no_offenders() {
        let edges = array![[0.0, 2.0], [2.0, 4.0], [4.0, 6.0]];
        let offending = scan(&edges.view(), &Mask1::none(), 1e-3);
        assert!(offending.is_empty());
    }

    #[test]
    fn test_gap_is_reported_once_per_boundary() {
        let edges = array![[0.0, 2.0], [2.0, 4.0], [5.0, 6.0]];
        let offending = scan(&edges.view(), &Mask1::none(), 1e-3);
        assert_eq!(
            offending,
            vec![BoundaryLocation::Between { left: 1, right: 2 }]
        );
    }

    #[test]
    fn test_either_neighbor_masked_excuses_the_gap() {
        let edges = array![[0.0, 2.0], [2.0, 4.0], [5.0, 6.0]];

        let left_masked = array![false, true, false];
        let offending = scan(&edges.view(), &Mask1::new(left_masked.view()), 1e-3);
        assert!(offending.is_empty());

        let right_masked = array![false, false, true];
        let offending = scan(&edges.view(), &Mask1::new(right_masked.view()), 1e-3);
        assert!(offending.is_empty());
    }

    #[test]
    fn test_mask_elsewhere_does_not_excuse() {
        let edges = array![[0.0, 2.0], [2.0, 4.0], [5.0, 6.0]];
        let mask = array![true, false, false];
        let offending = scan(&edges.view(), &Mask1::new(mask.view()), 1e-3);
        assert_eq!(
            offending,
            vec![BoundaryLocation::Between { left: 1, right: 2 }]
        );
    }
}
