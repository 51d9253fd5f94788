//! Back-substitution on an upper-triangular system

use crate::error::{Error, Result};
use crate::storage::{Matrix, Vector};

/// Solve the upper-triangular system `A·x = b` from the last equation up.
///
/// Strictly sequential: every solved unknown immediately corrects all
/// earlier right-hand side entries. `b` is consumed in the process and holds
/// no meaningful values afterwards.
pub(crate) fn back_substitute_impl(a: &Matrix, b: &mut Vector) -> Result<Vector> {
    let n = a.size();
    let mut x = Vector::zeros(n);

    for i in (0..n).rev() {
        let diag = a.get(i, i);
        if diag == 0.0 {
            return Err(Error::singular(i));
        }
        let xi = b[i] / diag;
        x[i] = xi;
        for k in (0..i).rev() {
            b[k] -= a.get(k, i) * xi;
        }
    }

    Ok(x)
}
