//! # gauss
//!
//! **Dense Gaussian elimination with partial pivoting on shared-memory worker threads.**
//!
//! gauss solves `A·x = b` for a square, dense, in-memory system. Pivot search
//! and row elimination are data-parallel within a column; columns and
//! back-substitution run strictly in order.
//!
//! ## Features
//!
//! - **O(1) pivot swap**: matrices are arrays of row handles, swapping rows
//!   never copies elements
//! - **Deterministic**: sequential and parallel runs produce bit-identical
//!   results, pivot ties always resolve to the lowest row
//! - **Reproducible inputs**: systems are generated from a seed and can be
//!   regenerated for verification instead of being copied
//! - **Typed failures**: a singular system is an [`Error::SingularMatrix`],
//!   never a process abort
//!
//! ## Quick Start
//!
//! ```rust
//! use gauss::prelude::*;
//!
//! let mut a = Matrix::from_rows(&[[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]])?;
//! let mut b = Vector::from_slice(&[8.0, -11.0, -3.0]);
//!
//! let client = SolverClient::parallel();
//! let x = client.solve(&mut a, &mut b)?;
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! # Ok::<(), gauss::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded pivot search and row elimination
//!
//! [`Error::SingularMatrix`]: crate::error::Error::SingularMatrix

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod runtime;
pub mod storage;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{
        GaussianElimination, PivotCandidate, Verification, fill_from_seed, initialize_from_seed,
        verify,
    };
    pub use crate::error::{Error, Result};
    pub use crate::runtime::{ParallelismConfig, SolverClient};
    pub use crate::storage::{Matrix, Vector};
}
