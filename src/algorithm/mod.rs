//! Gaussian elimination algorithms
//!
//! - [`init`]: seeded, reproducible system generation
//! - [`pivot`]: partial-pivot search (parallel reduction)
//! - [`elimination`]: row elimination (parallel sweep) and triangularization
//! - [`back_substitution`]: sequential triangular solve
//! - [`verify`](mod@verify): residual ratio check against the original system
//!
//! The operations are exposed through the [`GaussianElimination`] trait,
//! implemented by [`SolverClient`](crate::runtime::SolverClient).

pub(crate) mod back_substitution;
pub(crate) mod elimination;
pub mod helpers;
pub mod init;
pub mod pivot;
pub mod traits;
pub mod verify;

#[cfg(test)]
mod tests;

pub use init::{fill_from_seed, initialize_from_seed};
pub use pivot::PivotCandidate;
pub use traits::GaussianElimination;
pub use verify::{RATIO_LOWER, RATIO_UPPER, Verification, verify};
