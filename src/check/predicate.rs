//! Boundary-pair contiguity predicate and tolerance validation

use num_traits::Float;

use crate::error::{ContiguityError, Result};

/// Whether two shared boundary values meet within the absolute tolerance
///
/// The comparison is `|a - b| <= atol`; it is symmetric in its operands and
/// uses no relative component.
pub fn edges_meet<F: Float>(a: F, b: F, atol: F) -> bool {
    (a - b).abs() <= atol
}

/// Validate a caller-supplied tolerance
///
/// # Errors
///
/// Returns `InvalidTolerance` if `atol` is negative or not finite.
pub fn validated_atol<F: Float>(atol: F) -> Result<F> {
    if atol.is_finite() && atol >= F::zero() {
        Ok(atol)
    } else {
        Err(ContiguityError::InvalidTolerance {
            value: atol.to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_meet_is_symmetric_and_inclusive() {
        assert!(edges_meet(2.0, 2.0005, 1e-3));
        assert!(edges_meet(2.0005, 2.0, 1e-3));

        // The tolerance itself is inclusive; just beyond it is not.
        assert!(edges_meet(2.0, 2.001, 1e-3));
        assert!(!edges_meet(2.0, 2.0011, 1e-3));
    }

    #[test]
    fn test_zero_tolerance_requires_exact_match() {
        assert!(edges_meet(4.0, 4.0, 0.0));

        // One ulp away from 1.0 is a genuinely different value.
        assert!(!edges_meet(1.0, 1.0 + f64::EPSILON, 0.0));
    }

    #[test]
    fn test_tolerance_validation() {
        assert!(validated_atol(0.0).is_ok());
        assert!(validated_atol(1e-3).is_ok());

        assert!(matches!(
            validated_atol(-1e-3),
            Err(ContiguityError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            validated_atol(f64::NAN),
            Err(ContiguityError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            validated_atol(f64::INFINITY),
            Err(ContiguityError::InvalidTolerance { .. })
        ));
    }
}
