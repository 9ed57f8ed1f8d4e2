//! Sequential sieve engine
//!
//! Always available; the reference the parallel engine is checked against.

use super::{Backend, EngineInfo, SieveEngine};
use crate::domain::{MarkingTable, Sweep};

/// Single-threaded engine
pub struct SequentialEngine {
    info: EngineInfo,
}

impl SequentialEngine {
    pub fn new() -> Self {
        Self {
            info: EngineInfo {
                name: "Sequential (1 thread)".to_string(),
                backend: Backend::Sequential,
                workers: 1,
            },
        }
    }
}

impl Default for SequentialEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SieveEngine for SequentialEngine {
    fn backend(&self) -> Backend {
        Backend::Sequential
    }

    fn info(&self) -> &EngineInfo {
        &self.info
    }

    fn strike(&self, table: &mut MarkingTable, sweep: Sweep) -> usize {
        table.strike(sweep)
    }
}
