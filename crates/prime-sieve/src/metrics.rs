//! Metrics hooks for sieve invocations
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use prime_sieve::{Metrics, Sieve, SieveConfig};
//!
//! let metrics = Arc::new(Metrics::new());
//! let sieve = Sieve::new(SieveConfig::default())
//!     .unwrap()
//!     .with_metrics(metrics.clone());
//!
//! sieve.primes_below(100usize).unwrap();
//! assert_eq!(metrics.snapshot().primes_found, 25);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::backends::SweepStats;

/// Metrics collector for sieve operations
///
/// Thread-safe counters shared by every call on one `Sieve`.
#[derive(Default)]
pub struct Metrics {
    /// Completed sieve invocations
    pub sieves_run: AtomicU64,
    /// Requests rejected before sweeping (bad bound, table too large)
    pub requests_rejected: AtomicU64,
    /// Total primes returned
    pub primes_found: AtomicU64,
    /// Total candidates swept
    pub sweeps: AtomicU64,
    /// Total table slots struck
    pub composite_marks: AtomicU64,
    /// Total marking table bits allocated
    pub table_bits_allocated: AtomicU64,
    /// Cumulative sieve time in nanoseconds
    pub sieve_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a marking table allocation
    pub fn record_table_allocated(&self, storage_bits: usize) {
        self.table_bits_allocated
            .fetch_add(storage_bits as u64, Ordering::Relaxed);
    }

    /// Record a completed sieve
    ///
    /// # Arguments
    /// * `duration` - Time from allocation to extracted result
    /// * `stats` - Sweep work performed
    /// * `primes` - Length of the result sequence
    pub fn record_sieve(&self, duration: Duration, stats: SweepStats, primes: usize) {
        self.sieves_run.fetch_add(1, Ordering::Relaxed);
        self.sweeps.fetch_add(stats.sweeps as u64, Ordering::Relaxed);
        self.composite_marks
            .fetch_add(stats.marks as u64, Ordering::Relaxed);
        self.primes_found.fetch_add(primes as u64, Ordering::Relaxed);
        self.sieve_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record a request that failed before sweeping
    pub fn record_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sieves_run: self.sieves_run.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            primes_found: self.primes_found.load(Ordering::Relaxed),
            sweeps: self.sweeps.load(Ordering::Relaxed),
            composite_marks: self.composite_marks.load(Ordering::Relaxed),
            table_bits_allocated: self.table_bits_allocated.load(Ordering::Relaxed),
            avg_sieve_ns: self.avg_sieve_time_ns(),
        }
    }

    /// Calculate average sieve time in nanoseconds
    pub fn avg_sieve_time_ns(&self) -> u64 {
        let total = self.sieve_time_ns.load(Ordering::Relaxed);
        let count = self.sieves_run.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.sieves_run.store(0, Ordering::Relaxed);
        self.requests_rejected.store(0, Ordering::Relaxed);
        self.primes_found.store(0, Ordering::Relaxed);
        self.sweeps.store(0, Ordering::Relaxed);
        self.composite_marks.store(0, Ordering::Relaxed);
        self.table_bits_allocated.store(0, Ordering::Relaxed);
        self.sieve_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub sieves_run: u64,
    pub requests_rejected: u64,
    pub primes_found: u64,
    pub sweeps: u64,
    pub composite_marks: u64,
    pub table_bits_allocated: u64,
    pub avg_sieve_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to forward sieve metrics to an external system.
pub trait MetricsRecorder: Send + Sync {
    /// Record a marking table allocation
    fn record_table_allocated(&self, storage_bits: usize);

    /// Record a completed sieve
    fn record_sieve(&self, duration: Duration, stats: SweepStats, primes: usize);

    /// Record a request that failed before sweeping
    fn record_rejected(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_table_allocated(&self, _: usize) {}
    fn record_sieve(&self, _: Duration, _: SweepStats, _: usize) {}
    fn record_rejected(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_table_allocated(&self, storage_bits: usize) {
        Metrics::record_table_allocated(self, storage_bits);
    }

    fn record_sieve(&self, duration: Duration, stats: SweepStats, primes: usize) {
        Metrics::record_sieve(self, duration, stats, primes);
    }

    fn record_rejected(&self) {
        Metrics::record_rejected(self);
    }
}
