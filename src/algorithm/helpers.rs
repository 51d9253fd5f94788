//! Argument validation shared by the elimination operations

use crate::error::{Error, Result};
use crate::storage::{Matrix, Vector};

/// Validate that `b` matches the dimension of `a`, returning `n`
pub fn validate_system(a: &Matrix, b: &Vector) -> Result<usize> {
    let n = a.size();
    if b.size() != n {
        return Err(Error::dimension_mismatch(n, b.size()));
    }
    Ok(n)
}

/// Validate that `column` addresses a column of an n×n matrix
pub fn validate_column(n: usize, column: usize) -> Result<()> {
    if column >= n {
        return Err(Error::invalid_argument(
            "column",
            format!("column {column} out of range for a {n}x{n} matrix"),
        ));
    }
    Ok(())
}
