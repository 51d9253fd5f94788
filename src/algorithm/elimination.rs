//! Forward elimination with partial pivoting

use super::pivot::find_pivot_impl;
use crate::error::{Error, Result};
use crate::runtime::SolverClient;
use crate::storage::{Matrix, Vector};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Eliminate `column` from one row below the pivot.
///
/// Reads only the pivot row; writes only `row` and its right-hand side entry.
#[inline]
fn eliminate_row(row: &mut [f64], rhs: &mut f64, pivot_row: &[f64], pivot_rhs: f64, column: usize) {
    let c = -row[column] / pivot_row[column];
    // Exact zero instead of the rounded residue of the update
    row[column] = 0.0;
    for (x, &p) in row[column + 1..].iter_mut().zip(&pivot_row[column + 1..]) {
        *x += c * p;
    }
    *rhs += c * pivot_rhs;
}

/// Subtract multiples of row `column` from every row below it.
///
/// Expects the pivot to already sit on the diagonal. Rows below the pivot are
/// owned by exactly one task each, so the parallel sweep needs no locking.
pub(crate) fn eliminate_column_impl(
    client: &SolverClient,
    a: &mut Matrix,
    b: &mut Vector,
    column: usize,
) {
    let (pivot_row, below) = a.split_pivot_mut(column);
    let (b_head, b_below) = b.as_mut_slice().split_at_mut(column + 1);
    let pivot_rhs = b_head[column];

    #[cfg(feature = "rayon")]
    {
        if client.is_parallel() && below.len() > client.rayon_min_len() {
            let min_len = client.rayon_min_len();
            client.install_parallelism(|| {
                below
                    .par_iter_mut()
                    .zip(b_below.par_iter_mut())
                    .with_min_len(min_len)
                    .for_each(|(row, rhs)| eliminate_row(row, rhs, pivot_row, pivot_rhs, column));
            });
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    for (row, rhs) in below.iter_mut().zip(b_below.iter_mut()) {
        eliminate_row(row, rhs, pivot_row, pivot_rhs, column);
    }
}

/// Reduce `A` to upper-triangular form in place, applying the same row
/// operations to `B`.
///
/// Columns are processed strictly in order. Each column is a barrier: the
/// pivot search completes before the swap, and every row update completes
/// before the next column's search starts.
#[tracing::instrument(level = "debug", skip_all, fields(n = a.size(), parallel = client.is_parallel()))]
pub(crate) fn triangularize_impl(client: &SolverClient, a: &mut Matrix, b: &mut Vector) -> Result<()> {
    let n = a.size();

    for column in 0..n {
        let pivot = find_pivot_impl(client, a, column);
        if pivot.magnitude == 0.0 {
            tracing::debug!(column, "zero pivot");
            return Err(Error::singular(column));
        }
        tracing::trace!(column, pivot_row = pivot.row, magnitude = pivot.magnitude, "pivot");

        if pivot.row != column {
            a.row_swap(column, pivot.row);
            b.swap(column, pivot.row);
        }

        eliminate_column_impl(client, a, b, column);
    }

    Ok(())
}
