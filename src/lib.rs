//! Grid cell-bound contiguity validation for quadrilateral mesh plotting
//!
//! Plotting routines that draw quadrilateral grid cells from boundary
//! coordinates assume adjacent cells actually touch. When they do not, and
//! the gap is not hidden by a validity mask on the data, the rendered result
//! silently misleads. This crate provides the check that fails loudly
//! instead: given a coordinate's cell bounds (1D edge pairs or a 2D corner
//! lattice), a data array, and an optional mask, it reports every boundary
//! that exceeds the tolerance without either neighboring cell being masked
//! invalid.

#![forbid(unsafe_code)]

/// Contiguity predicate, per-rank scanners, and the top-level dispatcher
pub mod check;
/// Error types for contiguity validation
pub mod error;
/// Input model: cell bounds geometry and validity masks
pub mod geometry;

pub use check::{ContiguityChecker, check_contiguity_and_mask};
pub use error::{BoundaryLocation, ContiguityError, Result};
pub use geometry::Bounds;
