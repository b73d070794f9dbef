//! Contiguity checking: predicate, per-rank scanners, and the dispatcher
//!
//! The scanners are pure functions that collect offending boundary locations;
//! the dispatcher resolves shapes, gates on the tolerance, and converts a
//! non-empty offender list into an error.

/// Boundary-pair comparison and tolerance validation
pub mod predicate;
/// Adjacency scan for 1D cell edge pairs
pub mod scan1d;
/// Adjacency scan for 2D cell corner lattices
pub mod scan2d;

use ndarray::{ArrayViewD, Ix1, Ix2};
use num_traits::Float;

use crate::error::{ContiguityError, Result, shape_mismatch};
use crate::geometry::{Bounds, Mask1, Mask2};

/// Check that adjacent grid cells share boundaries within tolerance, unless
/// the data is masked where they do not
///
/// With `atol` absent the check is a deliberate no-op: some coordinates are
/// not rectilinear plot axes and contiguity is meaningless for them, so the
/// caller signals applicability by supplying a tolerance. `data` contributes
/// only its shape; `mask` marks cells whose data is invalid (`true`), which
/// excuses any discontiguity at a boundary either of whose neighboring cells
/// is masked.
///
/// The check is pure and stateless; it may run concurrently on independent
/// inputs.
///
/// # Errors
///
/// - `InvalidTolerance` if `atol` is present but negative or not finite.
/// - `ShapeMismatch` if `data` or `mask` does not match the bounds' cell
///   lattice.
/// - `DiscontiguousUnmasked` naming every boundary that exceeds tolerance
///   with neither neighboring cell masked.
pub fn check_contiguity_and_mask<F: Float>(
    bounds: &Bounds<'_, F>,
    data: &ArrayViewD<'_, F>,
    mask: Option<&ArrayViewD<'_, bool>>,
    atol: Option<F>,
) -> Result<()> {
    // Absent tolerance disables the check entirely, regardless of geometry.
    let Some(atol) = atol else {
        return Ok(());
    };
    let atol = predicate::validated_atol(atol)?;

    let cell_shape = bounds.cell_shape();
    if data.shape() != cell_shape.as_slice() {
        return Err(shape_mismatch("data", &cell_shape, data.shape()));
    }
    if let Some(cells) = mask {
        if cells.shape() != cell_shape.as_slice() {
            return Err(shape_mismatch("mask", &cell_shape, cells.shape()));
        }
    }

    let offending = match bounds {
        Bounds::OneDim(edges) => {
            let mask = mask
                .map(|cells| {
                    cells
                        .view()
                        .into_dimensionality::<Ix1>()
                        .map_err(|_| shape_mismatch("mask", &cell_shape, cells.shape()))
                })
                .transpose()?
                .map_or(Mask1::none(), Mask1::new);
            scan1d::scan(edges, &mask, atol)
        }
        Bounds::TwoDim(corners) => {
            let mask = mask
                .map(|cells| {
                    cells
                        .view()
                        .into_dimensionality::<Ix2>()
                        .map_err(|_| shape_mismatch("mask", &cell_shape, cells.shape()))
                })
                .transpose()?
                .map_or(Mask2::none(), Mask2::new);
            scan2d::scan(corners, &mask, atol)
        }
    };

    if offending.is_empty() {
        Ok(())
    } else {
        Err(ContiguityError::DiscontiguousUnmasked {
            locations: offending,
        })
    }
}

/// Contiguity checker configured once with an optional tolerance
///
/// Mirrors the call-site pattern of a plotting routine that decides once
/// whether a tolerance applies and then validates several coordinates with
/// it. Holds no other state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContiguityChecker {
    atol: Option<f64>,
}

impl ContiguityChecker {
    /// Checker with no tolerance: every check is a pass
    pub const fn new() -> Self {
        Self { atol: None }
    }

    /// Checker that evaluates contiguity with the given absolute tolerance
    pub const fn with_atol(atol: f64) -> Self {
        Self { atol: Some(atol) }
    }

    /// The configured tolerance, if any
    pub const fn atol(&self) -> Option<f64> {
        self.atol
    }

    /// Run the contiguity check with the configured tolerance
    ///
    /// # Errors
    ///
    /// Returns `InvalidTolerance` if the configured tolerance cannot be
    /// represented in the array element type, plus every error
    /// [`check_contiguity_and_mask`] can return.
    pub fn check<F: Float>(
        &self,
        bounds: &Bounds<'_, F>,
        data: &ArrayViewD<'_, F>,
        mask: Option<&ArrayViewD<'_, bool>>,
    ) -> Result<()> {
        let atol = self
            .atol
            .map(|value| F::from(value).ok_or(ContiguityError::InvalidTolerance { value }))
            .transpose()?;
        check_contiguity_and_mask(bounds, data, mask, atol)
    }
}
