//! Residual check of a computed solution against the original system

use super::helpers::validate_system;
use crate::error::{Error, Result};
use crate::storage::{Matrix, Vector};
use std::fmt;

/// Lower bound of the accepted `ans / b` ratio
pub const RATIO_LOWER: f64 = 0.999999;

/// Upper bound of the accepted `ans / b` ratio
pub const RATIO_UPPER: f64 = 1.00001;

/// Outcome of [`verify`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verification {
    /// Every row reproduced its right-hand side within tolerance
    Succeeded,
    /// First row whose recomputed value diverged
    Failed {
        /// Row index
        index: usize,
        /// `Σ A[index][j]·x[j]`
        computed: f64,
        /// Original `b[index]`
        expected: f64,
    },
}

impl Verification {
    /// Returns true on success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "Verification succeeded"),
            Self::Failed {
                index,
                computed,
                expected,
            } => write!(
                f,
                "Verification failed for index = {index}.\n{computed} != {expected}"
            ),
        }
    }
}

/// Scale-invariant ratio `max(|computed/expected|, |expected/computed|)`
#[inline]
pub fn residual_ratio(computed: f64, expected: f64) -> f64 {
    (computed / expected).abs().max((expected / computed).abs())
}

/// Returns true if `computed` is acceptably close to `expected`.
///
/// Identical values always match, which covers `0 == 0` where the ratio is
/// undefined.
#[inline]
pub fn within_tolerance(computed: f64, expected: f64) -> bool {
    if computed == expected {
        return true;
    }
    let ratio = residual_ratio(computed, expected);
    (RATIO_LOWER..=RATIO_UPPER).contains(&ratio)
}

/// Check that `x` satisfies `A·x = b` row by row.
///
/// `a` and `b` must be the original system, not the triangularized one; the
/// usual way to get them back is to re-run the seeded initializer. Stops at the
/// first failing row.
pub fn verify(a: &Matrix, b: &Vector, x: &Vector) -> Result<Verification> {
    let n = validate_system(a, b)?;
    if x.size() != n {
        return Err(Error::dimension_mismatch(n, x.size()));
    }

    for (index, row) in a.rows().enumerate() {
        let computed: f64 = row.iter().zip(x.as_slice()).map(|(&a_ij, &x_j)| a_ij * x_j).sum();
        let expected = b[index];
        if !within_tolerance(computed, expected) {
            tracing::debug!(index, computed, expected, "verification mismatch");
            return Ok(Verification::Failed {
                index,
                computed,
                expected,
            });
        }
    }

    Ok(Verification::Succeeded)
}
