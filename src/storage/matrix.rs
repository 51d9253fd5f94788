//! Square matrix stored as an array of independently owned rows

use crate::error::{Error, Result};
use std::ops::{Index, IndexMut};

/// A single owned matrix row.
///
/// Rows live behind their own heap allocation so that relocating a row only
/// moves a pointer.
pub type Row = Box<[f64]>;

/// Dense n×n matrix of `f64` with O(1) row exchange.
///
/// The matrix is an array of row handles rather than one contiguous buffer:
/// `row_swap` exchanges two handles and never touches the elements. This is
/// what keeps the per-column pivot swap of Gaussian elimination constant-time
/// for large `n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: Vec<Row>,
}

impl Matrix {
    /// Create an n×n matrix filled with zeros
    pub fn zeros(n: usize) -> Self {
        let rows = (0..n).map(|_| vec![0.0; n].into_boxed_slice()).collect();
        Self { rows }
    }

    /// Create a matrix from row literals
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let rows = rows
            .iter()
            .map(|row| {
                let row = row.as_ref();
                if row.len() != n {
                    return Err(Error::dimension_mismatch(n, row.len()));
                }
                Ok(Row::from(row))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Dimension `n` of the matrix
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Element at (`row`, `col`)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Overwrite the element at (`row`, `col`)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.rows[row][col] = value;
    }

    /// Exchange the identities of rows `i` and `j` without copying elements
    #[inline]
    pub fn row_swap(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Borrow row `i`
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Mutably borrow row `i`
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.rows[i]
    }

    /// Iterate over the rows in their current order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.rows.iter().map(|row| &**row)
    }

    /// Split the matrix at row `i`: a shared borrow of row `i` and a mutable
    /// borrow of every row strictly below it.
    ///
    /// The two borrows never alias, so the rows below may be updated from
    /// several threads while row `i` is read.
    pub(crate) fn split_pivot_mut(&mut self, i: usize) -> (&[f64], &mut [Row]) {
        let (head, tail) = self.rows.split_at_mut(i + 1);
        (&head[i][..], tail)
    }

    /// Returns true if every entry below the main diagonal is exactly zero
    pub fn is_upper_triangular(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| row[..i].iter().all(|&v| v == 0.0))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.rows[row][col]
    }
}
