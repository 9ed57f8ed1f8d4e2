//! Bit-packed marking table
//!
//! INVARIANTS:
//! - A slot cleared to `false` is never set back to `true`
//! - After a full sweep, `is_candidate(k)` is true iff `k` is prime
//!
//! Two layouts share the same sweep arithmetic. `Dense` stores one bit per
//! index. `OddOnly` stores one bit per odd index (slot `s` is `2s + 1`), and
//! reports 2 on its own. In both layouts the multiples `i*i, i*i + step, ...`
//! of an odd prime `i` are exactly `i` slots apart.

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SieveError;

const WORD_BITS: usize = usize::BITS as usize;

/// Storage layout of the marking table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    /// One bit per index in `0..bound`
    #[default]
    Dense,
    /// One bit per odd index; halves memory
    OddOnly,
}

impl TableLayout {
    /// Number of bits needed to cover `0..bound`
    pub fn storage_bits(self, bound: usize) -> usize {
        match self {
            TableLayout::Dense => bound,
            TableLayout::OddOnly => bound / 2,
        }
    }
}

impl std::fmt::Display for TableLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableLayout::Dense => write!(f, "dense"),
            TableLayout::OddOnly => write!(f, "odd-only"),
        }
    }
}

/// Slot range struck by a single sweep: `start, start + step, ...` below `end`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sweep {
    pub start: usize,
    pub step: usize,
    pub end: usize,
}

impl Sweep {
    /// Number of slots this sweep writes
    pub fn marks(&self) -> usize {
        if self.start >= self.end {
            0
        } else {
            (self.end - self.start - 1) / self.step + 1
        }
    }

    /// Width of the slot range covered, in table bits
    pub fn span(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Marking table for one sieve invocation
#[derive(Clone, Debug)]
pub struct MarkingTable {
    bits: BitVec<usize, Lsb0>,
    bound: usize,
    layout: TableLayout,
}

impl MarkingTable {
    /// Allocate a table for `0..bound` with every slot a candidate, then
    /// rule out 0 and 1 where they exist
    ///
    /// # Errors
    /// `ResourceExhaustion` when the table exceeds `limit_bits` or the
    /// allocator refuses the request.
    pub fn allocate(
        bound: usize,
        layout: TableLayout,
        limit_bits: Option<u64>,
    ) -> Result<Self, SieveError> {
        let storage_bits = layout.storage_bits(bound);
        let exhausted = SieveError::ResourceExhaustion {
            requested_bits: storage_bits,
            limit_bits,
        };

        if limit_bits.is_some_and(|limit| storage_bits as u64 > limit) {
            tracing::warn!(bound, storage_bits, ?limit_bits, "Marking table exceeds configured limit");
            return Err(exhausted);
        }

        let words = storage_bits.div_ceil(WORD_BITS);
        let mut raw: Vec<usize> = Vec::new();
        if raw.try_reserve_exact(words).is_err() {
            tracing::warn!(bound, storage_bits, "Marking table allocation failed");
            return Err(exhausted);
        }
        raw.resize(words, usize::MAX);

        let mut bits = BitVec::<usize, Lsb0>::from_vec(raw);
        bits.truncate(storage_bits);

        let mut table = Self {
            bits,
            bound,
            layout,
        };
        table.rule_out_units();
        Ok(table)
    }

    fn rule_out_units(&mut self) {
        match self.layout {
            TableLayout::Dense => {
                if self.bound >= 1 {
                    self.bits.set(0, false);
                }
                if self.bound >= 2 {
                    self.bits.set(1, false);
                }
            }
            // Slot 0 holds index 1; index 0 is even and never stored
            TableLayout::OddOnly => {
                if !self.bits.is_empty() {
                    self.bits.set(0, false);
                }
            }
        }
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn layout(&self) -> TableLayout {
        self.layout
    }

    /// Bits of storage backing the table
    pub fn storage_bits(&self) -> usize {
        self.bits.len()
    }

    /// Whether `k` has not been ruled out. `k` must be below the bound.
    pub fn is_candidate(&self, k: usize) -> bool {
        debug_assert!(k < self.bound, "index {k} outside table of {}", self.bound);
        match self.layout {
            TableLayout::Dense => self.bits[k],
            TableLayout::OddOnly => match k {
                2 => true,
                k if k % 2 == 0 => false,
                k => self.bits[k / 2],
            },
        }
    }

    /// Slots holding the multiples of candidate `i` from `i*i` upward
    ///
    /// Returns `None` when there is nothing to strike: `i*i` is past the
    /// bound, or `i` is even in the odd-only layout (evens are not stored).
    pub fn sweep_for(&self, i: usize) -> Option<Sweep> {
        let square = i.checked_mul(i)?;
        if square >= self.bound {
            return None;
        }
        let sweep = match self.layout {
            TableLayout::Dense => Sweep {
                start: square,
                step: i,
                end: self.bound,
            },
            TableLayout::OddOnly if i % 2 == 0 => return None,
            TableLayout::OddOnly => Sweep {
                start: square / 2,
                step: i,
                end: self.bits.len(),
            },
        };
        Some(sweep)
    }

    /// Clear every slot of `sweep`; returns the number of slots written
    pub fn strike(&mut self, sweep: Sweep) -> usize {
        let mut marks = 0;
        for slot in (sweep.start..sweep.end).step_by(sweep.step) {
            self.bits.set(slot, false);
            marks += 1;
        }
        marks
    }

    /// Backing words, least significant bit first
    ///
    /// Bits past `storage_bits()` in the last word are padding and must not
    /// be read as table entries.
    pub fn raw_words_mut(&mut self) -> &mut [usize] {
        self.bits.as_raw_mut_slice()
    }

    /// Number of candidates left in the table
    pub fn count(&self) -> usize {
        let ones = self.bits.count_ones();
        match self.layout {
            TableLayout::Dense => ones,
            TableLayout::OddOnly => ones + usize::from(self.bound > 2),
        }
    }

    /// Ascending list of candidates left in the table
    pub fn primes(&self) -> Vec<usize> {
        let mut primes = Vec::with_capacity(self.count());
        match self.layout {
            TableLayout::Dense => primes.extend(self.bits.iter_ones()),
            TableLayout::OddOnly => {
                if self.bound > 2 {
                    primes.push(2);
                }
                primes.extend(self.bits.iter_ones().map(|slot| 2 * slot + 1));
            }
        }
        primes
    }
}
