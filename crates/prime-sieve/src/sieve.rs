//! Sieve of Eratosthenes
//!
//! INVARIANTS:
//! - Every returned value `p` satisfies `1 < p < bound`
//! - The result is strictly increasing
//! - A value below the bound is returned iff it is prime
//! - Every engine and layout returns the same sequence for the same bound

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::backends::{create_engine, sequential::SequentialEngine, Backend, SieveEngine};
use crate::domain::{Bound, MarkingTable, SieveConfig, TableLayout};
use crate::error::SieveError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// All primes strictly below `sieve_length`, in ascending order
///
/// Runs the single-threaded engine over a dense table. Accepts any integer
/// or float type; negative or fractional bounds fail with `InvalidArgument`.
///
/// ```
/// assert_eq!(prime_sieve::sieve(10).unwrap(), vec![2, 3, 5, 7]);
/// assert!(prime_sieve::sieve(-1).is_err());
/// ```
pub fn sieve<B>(sieve_length: B) -> Result<Vec<usize>, SieveError>
where
    B: TryInto<Bound>,
    SieveError: From<B::Error>,
{
    Ok(sieve_table(sieve_length.try_into()?)?.into_primes())
}

/// Number of primes strictly below `sieve_length`
pub fn count_primes_below<B>(sieve_length: B) -> Result<usize, SieveError>
where
    B: TryInto<Bound>,
    SieveError: From<B::Error>,
{
    Ok(sieve_table(sieve_length.try_into()?)?.count())
}

fn sieve_table(bound: Bound) -> Result<SievedTable, SieveError> {
    let mut table = MarkingTable::allocate(bound.get(), TableLayout::Dense, None)?;
    let stats = SequentialEngine::new().sweep(&mut table);
    debug!(%bound, sweeps = stats.sweeps, marks = stats.marks, "Sieve complete");
    Ok(SievedTable { table })
}

/// Configured sieve
///
/// Cheap to share: `Sieve` is `Send + Sync` and every call allocates its own
/// marking table.
pub struct Sieve {
    config: SieveConfig,
    engine: Arc<dyn SieveEngine>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl Sieve {
    /// Create a sieve from a validated configuration
    pub fn new(config: SieveConfig) -> Result<Self, SieveError> {
        config.validate()?;
        let engine = create_engine(config.backend, config.parallel_threshold)?;
        debug!(
            engine = %engine.info().name,
            layout = %config.layout,
            max_table_bits = config.max_table_bits,
            "Sieve created"
        );

        Ok(Self {
            config,
            engine,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Attach a metrics recorder
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    pub fn backend(&self) -> Backend {
        self.engine.backend()
    }

    /// Sieve `0..sieve_length` and keep the finished table for queries
    pub fn table<B>(&self, sieve_length: B) -> Result<SievedTable, SieveError>
    where
        B: TryInto<Bound>,
        SieveError: From<B::Error>,
    {
        let started = Instant::now();

        let bound: Bound = sieve_length.try_into().map_err(|e| {
            self.metrics.record_rejected();
            SieveError::from(e)
        })?;

        let mut table = MarkingTable::allocate(
            bound.get(),
            self.config.layout,
            Some(self.config.max_table_bits),
        )
        .inspect_err(|_| self.metrics.record_rejected())?;
        self.metrics.record_table_allocated(table.storage_bits());

        let stats = self.engine.sweep(&mut table);
        let sieved = SievedTable { table };
        let count = sieved.count();

        self.metrics.record_sieve(started.elapsed(), stats, count);
        debug!(
            %bound,
            backend = %self.engine.backend(),
            layout = %self.config.layout,
            sweeps = stats.sweeps,
            primes = count,
            "Sieve complete"
        );

        Ok(sieved)
    }

    /// All primes strictly below `sieve_length`, in ascending order
    pub fn primes_below<B>(&self, sieve_length: B) -> Result<Vec<usize>, SieveError>
    where
        B: TryInto<Bound>,
        SieveError: From<B::Error>,
    {
        Ok(self.table(sieve_length)?.into_primes())
    }

    /// Number of primes strictly below `sieve_length`
    pub fn count_below<B>(&self, sieve_length: B) -> Result<usize, SieveError>
    where
        B: TryInto<Bound>,
        SieveError: From<B::Error>,
    {
        Ok(self.table(sieve_length)?.count())
    }
}

/// Finished marking table
///
/// Answers primality only for values inside the swept range.
#[derive(Clone, Debug)]
pub struct SievedTable {
    table: MarkingTable,
}

impl SievedTable {
    /// Exclusive upper limit of the swept range
    pub fn bound(&self) -> usize {
        self.table.bound()
    }

    pub fn layout(&self) -> TableLayout {
        self.table.layout()
    }

    /// Whether `value` is prime
    ///
    /// # Errors
    /// `OutOfRange` when `value` is not below the bound.
    pub fn is_prime(&self, value: usize) -> Result<bool, SieveError> {
        if value >= self.table.bound() {
            return Err(SieveError::OutOfRange {
                value,
                bound: self.table.bound(),
            });
        }
        Ok(self.table.is_candidate(value))
    }

    /// Number of primes below the bound
    pub fn count(&self) -> usize {
        self.table.count()
    }

    /// Ascending primes below the bound
    pub fn primes(&self) -> Vec<usize> {
        self.table.primes()
    }

    /// Extract the primes and drop the table
    pub fn into_primes(self) -> Vec<usize> {
        self.table.primes()
    }
}
