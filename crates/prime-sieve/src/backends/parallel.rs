//! CPU sieve engine using Rayon
//!
//! Only the inner sweep of a single candidate is parallel. The slot range is
//! split on word boundaries so no two workers share a word, and `strike`
//! returns only after every worker has finished. That return is the barrier
//! between candidate `i` and the next candidate check.

use rayon::prelude::*;

use super::{Backend, EngineInfo, SieveEngine};
use crate::domain::{MarkingTable, Sweep};

const WORD_BITS: usize = usize::BITS as usize;

/// Chunks handed out per worker, for load balancing across uneven sweeps
const CHUNKS_PER_WORKER: usize = 4;

/// CPU-based sieve engine using Rayon
pub struct RayonEngine {
    info: EngineInfo,
    parallel_threshold: usize,
}

impl RayonEngine {
    pub fn new(parallel_threshold: usize) -> Self {
        let workers = num_cpus::get();

        Self {
            info: EngineInfo {
                name: format!("CPU ({} cores)", workers),
                backend: Backend::Rayon,
                workers,
            },
            parallel_threshold: parallel_threshold.max(1),
        }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn chunk_words(&self, words: usize) -> usize {
        let chunks = self.info.workers.max(1) * CHUNKS_PER_WORKER;
        words.div_ceil(chunks).max(1)
    }
}

impl Default for RayonEngine {
    fn default() -> Self {
        Self::new(crate::domain::DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl SieveEngine for RayonEngine {
    fn backend(&self) -> Backend {
        Backend::Rayon
    }

    fn info(&self) -> &EngineInfo {
        &self.info
    }

    fn strike(&self, table: &mut MarkingTable, sweep: Sweep) -> usize {
        if sweep.span() < self.parallel_threshold {
            return table.strike(sweep);
        }

        let first_word = sweep.start / WORD_BITS;
        let last_word = sweep.end.div_ceil(WORD_BITS);
        let words = &mut table.raw_words_mut()[first_word..last_word];
        let chunk_words = self.chunk_words(words.len());

        words
            .par_chunks_mut(chunk_words)
            .enumerate()
            .map(|(chunk, words)| {
                let base = (first_word + chunk * chunk_words) * WORD_BITS;
                strike_chunk(words, base, sweep)
            })
            .sum()
    }
}

/// Clear the slots of `sweep` that fall inside `words`, whose first bit is
/// table slot `base`
fn strike_chunk(words: &mut [usize], base: usize, sweep: Sweep) -> usize {
    let lo = base.max(sweep.start);
    let hi = (base + words.len() * WORD_BITS).min(sweep.end);
    if lo >= hi {
        return 0;
    }

    // First multiple at or after lo
    let offset = (lo - sweep.start).div_ceil(sweep.step) * sweep.step;
    let mut slot = sweep.start + offset;
    let mut marks = 0;

    while slot < hi {
        let bit = slot - base;
        words[bit / WORD_BITS] &= !(1usize << (bit % WORD_BITS));
        marks += 1;
        slot += sweep.step;
    }

    marks
}
