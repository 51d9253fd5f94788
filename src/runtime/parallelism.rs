//! Parallelism configuration for the CPU solver

/// Default minimum number of rows handed to one worker task.
///
/// Rows of a dense system are long, so even a couple of rows per task is
/// enough work to amortise the scheduling cost.
pub const DEFAULT_CHUNK_SIZE: usize = 2;

/// How much parallelism a [`SolverClient`](super::SolverClient) may use.
///
/// - `num_threads`: `None` uses rayon's global pool, `Some(1)` forces the
///   sequential code path, `Some(n)` builds a dedicated pool of `n` workers.
/// - `chunk_size`: minimum rows per task for pivot search and elimination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    num_threads: Option<usize>,
    chunk_size: Option<usize>,
}

impl ParallelismConfig {
    /// Create a new parallelism configuration
    pub fn new(num_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        Self {
            num_threads,
            chunk_size,
        }
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self::new(Some(1), None)
    }

    /// Requested worker thread count, if any
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    /// Minimum rows per task
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE).max(1)
    }

    /// Returns true if this configuration never spawns parallel work
    pub fn is_sequential(&self) -> bool {
        cfg!(not(feature = "rayon")) || self.num_threads == Some(1)
    }
}
