//! Input model for contiguity validation
//!
//! This module contains the read-only views the checker operates on:
//! - Cell boundary geometry as a tagged 1D/2D variant
//! - Validity mask lookups that default to valid when no mask is supplied

/// Cell boundary geometry and rank resolution
pub mod bounds;
/// Validity mask wrappers with ambient absence
pub mod mask;

pub use bounds::Bounds;
pub use mask::{Mask1, Mask2};
