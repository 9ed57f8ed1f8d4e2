//! Sieve engines
//!
//! The sequential engine is always compiled in. The Rayon engine sits behind
//! the `parallel` feature and only splits the inner sweep of one candidate;
//! successive candidates still run in order.

pub mod sequential;

#[cfg(feature = "parallel")]
pub mod parallel;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{integer_sqrt, MarkingTable, Sweep};
use crate::error::SieveError;

/// Engine backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Single thread
    Sequential,
    /// Inner sweeps split across the Rayon pool
    Rayon,
}

impl Backend {
    /// Whether this backend was compiled in
    pub fn is_available(self) -> bool {
        match self {
            Backend::Sequential => true,
            Backend::Rayon => cfg!(feature = "parallel"),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "parallel") {
            Backend::Rayon
        } else {
            Backend::Sequential
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Sequential => write!(f, "Sequential"),
            Backend::Rayon => write!(f, "CPU (Rayon)"),
        }
    }
}

/// Engine information
#[derive(Debug, Clone)]
pub struct EngineInfo {
    pub name: String,
    pub backend: Backend,
    pub workers: usize,
}

/// Work done by one full sweep of a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Candidates whose multiples were struck
    pub sweeps: usize,
    /// Table slots written
    pub marks: usize,
}

/// Sieve engine trait - implemented by all backends
pub trait SieveEngine: Send + Sync {
    /// Get backend type
    fn backend(&self) -> Backend;

    /// Get engine info
    fn info(&self) -> &EngineInfo;

    /// Clear every slot of one sweep; returns the number of slots written
    ///
    /// Must not return before every write is visible to the caller: the next
    /// candidate check reads the table this sweep produced.
    fn strike(&self, table: &mut MarkingTable, sweep: Sweep) -> usize;

    /// Run the outer loop over `2..=isqrt(bound)` against a fresh table
    fn sweep(&self, table: &mut MarkingTable) -> SweepStats {
        let mut stats = SweepStats::default();
        let root = integer_sqrt(table.bound());

        for i in 2..=root {
            if !table.is_candidate(i) {
                continue;
            }
            if let Some(sweep) = table.sweep_for(i) {
                let marks = self.strike(table, sweep);
                tracing::trace!(candidate = i, marks, "Sweep complete");
                stats.sweeps += 1;
                stats.marks += marks;
            }
        }

        stats
    }
}

/// Pick the best available engine
pub fn auto_detect(parallel_threshold: usize) -> Arc<dyn SieveEngine> {
    #[cfg(feature = "parallel")]
    {
        let engine = parallel::RayonEngine::new(parallel_threshold);
        tracing::debug!(workers = engine.info().workers, "Using Rayon sieve engine");
        Arc::new(engine)
    }

    #[cfg(not(feature = "parallel"))]
    {
        let _ = parallel_threshold;
        tracing::debug!("Using sequential sieve engine");
        Arc::new(sequential::SequentialEngine::new())
    }
}

/// Create a specific backend
pub fn create_engine(
    backend: Backend,
    parallel_threshold: usize,
) -> Result<Arc<dyn SieveEngine>, SieveError> {
    match backend {
        Backend::Sequential => {
            let _ = parallel_threshold;
            Ok(Arc::new(sequential::SequentialEngine::new()))
        }
        Backend::Rayon => {
            #[cfg(feature = "parallel")]
            {
                Ok(Arc::new(parallel::RayonEngine::new(parallel_threshold)))
            }
            #[cfg(not(feature = "parallel"))]
            {
                Err(SieveError::BackendUnavailable(Backend::Rayon))
            }
        }
    }
}
