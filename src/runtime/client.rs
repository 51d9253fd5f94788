//! Solver client: owns the parallelism policy for every operation it dispatches

use super::parallelism::ParallelismConfig;
use crate::error::{Error, Result};
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// Dispatch object for Gaussian elimination on the host CPU.
///
/// A client is either sequential or parallel. Parallel clients run their
/// data-parallel phases (pivot search, row elimination) on rayon, either in
/// the global pool or in a dedicated pool sized by [`ParallelismConfig`].
/// Both modes produce bit-identical results.
#[derive(Clone, Debug)]
pub struct SolverClient {
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl SolverClient {
    /// Create a sequential client
    pub fn new() -> Self {
        Self {
            parallelism: ParallelismConfig::sequential(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Create a parallel client running on rayon's global pool
    pub fn parallel() -> Self {
        Self {
            parallelism: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Reconfigure parallelism, building a dedicated worker pool when a thread
    /// count greater than one is requested.
    ///
    /// A thread count of zero is rejected.
    pub fn try_with_parallelism(self, config: ParallelismConfig) -> Result<Self> {
        if config.num_threads() == Some(0) {
            return Err(Error::invalid_argument(
                "num_threads",
                "thread count must be at least 1",
            ));
        }

        #[cfg(feature = "rayon")]
        let pool = match config.num_threads() {
            Some(n) if n > 1 => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("gauss-worker-{i}"))
                    .build()?,
            )),
            _ => None,
        };

        Ok(Self {
            parallelism: config,
            #[cfg(feature = "rayon")]
            pool,
        })
    }

    /// Like [`try_with_parallelism`](Self::try_with_parallelism), but falls back
    /// to the global pool if the thread count is rejected or a dedicated pool
    /// cannot be built.
    pub fn with_parallelism(self, config: ParallelismConfig) -> Self {
        match self.try_with_parallelism(config) {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!(%err, "falling back to the global thread pool");
                Self {
                    parallelism: ParallelismConfig::new(None, Some(config.chunk_size())),
                    #[cfg(feature = "rayon")]
                    pool: None,
                }
            }
        }
    }

    /// Active parallelism configuration
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    /// Returns true if data-parallel phases run on worker threads
    pub fn is_parallel(&self) -> bool {
        !self.parallelism.is_sequential()
    }

    /// Minimum rows per worker task
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub(crate) fn rayon_min_len(&self) -> usize {
        self.parallelism.chunk_size()
    }

    /// Run `f` inside this client's worker pool.
    ///
    /// Clients without a dedicated pool run `f` on the calling thread, where
    /// rayon work falls through to the global pool.
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub(crate) fn install_parallelism<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        #[cfg(feature = "rayon")]
        {
            if let Some(pool) = &self.pool {
                return pool.install(f);
            }
        }
        f()
    }
}

impl Default for SolverClient {
    fn default() -> Self {
        Self::new()
    }
}
