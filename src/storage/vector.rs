//! Dense vector of doubles

use std::ops::{Index, IndexMut};

/// Mutable sequence of `n` doubles.
///
/// Used both for the right-hand side `B`, which is updated in lockstep with
/// row operations on `A`, and for the solution `X`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a vector of `n` zeros
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// Create a vector from a slice
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Element `i`
    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.data[i]
    }

    /// Overwrite element `i`
    #[inline]
    pub fn set(&mut self, i: usize, value: f64) {
        self.data[i] = value;
    }

    /// Exchange elements `i` and `j`
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    /// View as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// View as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}
