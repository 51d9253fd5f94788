//! Error types for gauss

use thiserror::Error;

/// Result type alias using gauss's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or solving a system
#[derive(Error, Debug)]
pub enum Error {
    /// The largest candidate pivot in a column is exactly zero
    #[error("Matrix is singular: no non-zero pivot in column {column}")]
    SingularMatrix {
        /// Column at which elimination could not continue
        column: usize,
    },

    /// Operand dimensions disagree
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Dedicated worker pool could not be created
    #[cfg(feature = "rayon")]
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// Create a singular matrix error
    pub fn singular(column: usize) -> Self {
        Self::SingularMatrix { column }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Returns the failing column if this is a singular matrix error
    pub fn singular_column(&self) -> Option<usize> {
        match self {
            Self::SingularMatrix { column } => Some(*column),
            _ => None,
        }
    }
}
