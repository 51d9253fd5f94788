//! Partial-pivot search

use crate::runtime::SolverClient;
use crate::storage::Matrix;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Candidate pivot: a row and the magnitude of its entry in the pivot column
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PivotCandidate {
    /// Row index
    pub row: usize,
    /// Absolute value of the entry in the pivot column
    pub magnitude: f64,
}

impl PivotCandidate {
    /// Create a candidate
    pub fn new(row: usize, magnitude: f64) -> Self {
        Self { row, magnitude }
    }

    /// Combine two candidates.
    ///
    /// The larger magnitude wins; on an exact tie the lower row index wins.
    /// The combiner is associative and commutative, so the result of a
    /// reduction does not depend on how rows were split across tasks.
    #[inline]
    pub fn max_by_magnitude(self, other: Self) -> Self {
        if other.magnitude > self.magnitude
            || (other.magnitude == self.magnitude && other.row < self.row)
        {
            other
        } else {
            self
        }
    }
}

/// Find the row in `column..n` with the largest `|A[row][column]|`.
///
/// Caller guarantees `column < n`. Read-only on `a`.
pub(crate) fn find_pivot_impl(client: &SolverClient, a: &Matrix, column: usize) -> PivotCandidate {
    let n = a.size();
    let candidate = |row: usize| PivotCandidate::new(row, a.get(row, column).abs());

    #[cfg(feature = "rayon")]
    {
        if client.is_parallel() && n - column > client.rayon_min_len() {
            let min_len = client.rayon_min_len();
            // Each task seeds its local search with its own first row
            let best = client.install_parallelism(|| {
                (column..n)
                    .into_par_iter()
                    .with_min_len(min_len)
                    .map(candidate)
                    .reduce_with(PivotCandidate::max_by_magnitude)
            });
            return best.unwrap_or_else(|| candidate(column));
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    ((column + 1)..n)
        .map(candidate)
        .fold(candidate(column), PivotCandidate::max_by_magnitude)
}
