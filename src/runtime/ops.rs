//! GaussianElimination implementation for SolverClient

use super::SolverClient;
use crate::algorithm::back_substitution::back_substitute_impl;
use crate::algorithm::elimination::{eliminate_column_impl, triangularize_impl};
use crate::algorithm::helpers::{validate_column, validate_system};
use crate::algorithm::pivot::find_pivot_impl;
use crate::algorithm::{GaussianElimination, PivotCandidate};
use crate::error::{Error, Result};
use crate::storage::{Matrix, Vector};

impl GaussianElimination for SolverClient {
    fn find_pivot(&self, a: &Matrix, column: usize) -> Result<PivotCandidate> {
        validate_column(a.size(), column)?;
        Ok(find_pivot_impl(self, a, column))
    }

    fn eliminate_column(&self, a: &mut Matrix, b: &mut Vector, column: usize) -> Result<()> {
        let n = validate_system(a, b)?;
        validate_column(n, column)?;
        if a.get(column, column) == 0.0 {
            return Err(Error::singular(column));
        }
        eliminate_column_impl(self, a, b, column);
        Ok(())
    }

    fn triangularize(&self, a: &mut Matrix, b: &mut Vector) -> Result<()> {
        validate_system(a, b)?;
        triangularize_impl(self, a, b)
    }

    fn back_substitute(&self, a: &Matrix, b: &mut Vector) -> Result<Vector> {
        validate_system(a, b)?;
        back_substitute_impl(a, b)
    }

    fn solve(&self, a: &mut Matrix, b: &mut Vector) -> Result<Vector> {
        let n = validate_system(a, b)?;
        tracing::debug!(n, parallel = self.is_parallel(), "solving dense system");
        triangularize_impl(self, a, b)?;
        back_substitute_impl(a, b)
    }
}
