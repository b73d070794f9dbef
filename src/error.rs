//! Error types for contiguity validation

use std::fmt;

/// Location of a single cell boundary within the grid
///
/// A boundary sits between two adjacent cells; the location identifies it by
/// the first cell of the pair and, for 2D grids, the axis of adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryLocation {
    /// 1D boundary between cell `left` and cell `right` (= `left + 1`)
    Between {
        /// Index of the cell on the lower side of the boundary
        left: usize,
        /// Index of the cell on the upper side of the boundary
        right: usize,
    },

    /// 2D boundary between column-adjacent cells `(row, col)` and `(row, col + 1)`
    AlongRow {
        /// Row of both cells
        row: usize,
        /// Column of the left cell of the pair
        col: usize,
    },

    /// 2D boundary between row-adjacent cells `(row, col)` and `(row + 1, col)`
    AlongColumn {
        /// Row of the lower cell of the pair
        row: usize,
        /// Column of both cells
        col: usize,
    },
}

impl fmt::Display for BoundaryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Between { left, right } => {
                write!(f, "between cells {left} and {right}")
            }
            Self::AlongRow { row, col } => {
                write!(f, "between cells ({row}, {col}) and ({row}, {})", col + 1)
            }
            Self::AlongColumn { row, col } => {
                write!(f, "between cells ({row}, {col}) and ({}, {col})", row + 1)
            }
        }
    }
}

/// Main error type for contiguity validation
#[derive(Debug, Clone, PartialEq)]
pub enum ContiguityError {
    /// Coordinate rank derived from the bounds shape is neither 1 nor 2
    UnsupportedRank {
        /// The unsupported coordinate rank
        rank: usize,
    },

    /// Bounds and data/mask shapes disagree
    ShapeMismatch {
        /// Name of the input whose shape is wrong
        what: &'static str,
        /// Shape implied by the bounds' cell lattice
        expected: Vec<usize>,
        /// Shape actually supplied
        found: Vec<usize>,
    },

    /// Tolerance is negative or not finite
    InvalidTolerance {
        /// The rejected tolerance value
        value: f64,
    },

    /// One or more adjacent-cell boundaries exceed tolerance and neither
    /// neighboring cell is masked invalid
    DiscontiguousUnmasked {
        /// Every offending boundary, in scan order
        locations: Vec<BoundaryLocation>,
    },
}

impl fmt::Display for ContiguityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedRank { rank } => {
                write!(
                    f,
                    "Unsupported coordinate rank {rank}: contiguity is only \
                     defined for 1D and 2D cell bounds"
                )
            }
            Self::ShapeMismatch {
                what,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape of {what} {found:?} does not match the bounds' \
                     cell lattice {expected:?}"
                )
            }
            Self::InvalidTolerance { value } => {
                write!(
                    f,
                    "Invalid tolerance {value}: atol must be finite and non-negative"
                )
            }
            Self::DiscontiguousUnmasked { locations } => {
                write!(
                    f,
                    "Cell bounds are not contiguous and data is not masked \
                     where the discontiguity occurs:"
                )?;
                for location in locations {
                    write!(f, " {location};")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ContiguityError {}

/// Convenience type alias for validation results
pub type Result<T> = std::result::Result<T, ContiguityError>;

/// Create a shape mismatch error
pub fn shape_mismatch(
    what: &'static str,
    expected: &[usize],
    found: &[usize],
) -> ContiguityError {
    ContiguityError::ShapeMismatch {
        what,
        expected: expected.to_vec(),
        found: found.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discontiguous_message_names_every_location() {
        let error = ContiguityError::DiscontiguousUnmasked {
            locations: vec![
                BoundaryLocation::Between { left: 1, right: 2 },
                BoundaryLocation::AlongRow { row: 3, col: 4 },
            ],
        };

        let message = error.to_string();
        assert!(message.contains("not contiguous"));
        assert!(message.contains("not masked"));
        assert!(message.contains("between cells 1 and 2"));
        assert!(message.contains("between cells (3, 4) and (3, 5)"));
    }

    #[test]
    fn test_shape_mismatch_message_names_input() {
        let error = shape_mismatch("data", &[3], &[4]);
        let message = error.to_string();
        assert!(message.contains("data"));
        assert!(message.contains("[3]"));
        assert!(message.contains("[4]"));
    }
}
