//! CPU runtime for the elimination engine
//!
//! A [`SolverClient`] decides, once, how an operation is executed: on the
//! calling thread, on rayon's global pool, or on a dedicated pool sized by
//! [`ParallelismConfig`]. Algorithms in [`crate::algorithm`] take the client
//! and never spawn threads on their own.

mod client;
mod ops;
mod parallelism;

pub use client::SolverClient;
pub use parallelism::{DEFAULT_CHUNK_SIZE, ParallelismConfig};
