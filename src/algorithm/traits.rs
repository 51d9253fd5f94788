//! Gaussian elimination trait definition

use super::pivot::PivotCandidate;
use crate::error::Result;
use crate::storage::{Matrix, Vector};

/// Dense Gaussian elimination with partial pivoting.
///
/// All operations work in place on caller-owned storage. `A` becomes upper
/// triangular and `B` accumulates the matching corrections, so callers that
/// need the original system afterwards must rebuild it (see
/// [`fill_from_seed`](super::fill_from_seed)).
///
/// # Algorithm
///
/// For each column `i` in increasing order:
///
/// 1. Find the row `p >= i` maximising `|A[p][i]|` (lowest `p` on ties)
/// 2. Fail with [`Error::SingularMatrix`](crate::error::Error::SingularMatrix)
///    if that magnitude is exactly zero
/// 3. Swap rows `i` and `p` of `A` and `B`
/// 4. For each `k > i`: `c = -A[k][i] / A[i][i]`, `A[k][i] = 0`,
///    `A[k][j] += c·A[i][j]` for `j > i`, `B[k] += c·B[i]`
///
/// then solve the triangular system by back-substitution.
pub trait GaussianElimination {
    /// Pivot search over rows `column..n` of `column`. Read-only on `a`.
    fn find_pivot(&self, a: &Matrix, column: usize) -> Result<PivotCandidate>;

    /// Row elimination of `column`, assuming its pivot is already on the
    /// diagonal.
    ///
    /// Returns `SingularMatrix` if the diagonal entry is zero.
    fn eliminate_column(&self, a: &mut Matrix, b: &mut Vector, column: usize) -> Result<()>;

    /// Triangularize `a` in place, applying the row operations to `b`.
    ///
    /// On `SingularMatrix { column }`, columns before `column` have been fully
    /// eliminated and the rest are untouched.
    fn triangularize(&self, a: &mut Matrix, b: &mut Vector) -> Result<()>;

    /// Solve an upper-triangular system, consuming `b`.
    fn back_substitute(&self, a: &Matrix, b: &mut Vector) -> Result<Vector>;

    /// Triangularize and back-substitute, returning `x`.
    fn solve(&self, a: &mut Matrix, b: &mut Vector) -> Result<Vector>;
}
