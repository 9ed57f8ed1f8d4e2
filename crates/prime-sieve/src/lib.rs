//! # Prime Sieve
//!
//! All primes strictly below a bound, by the Sieve of Eratosthenes.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no threads
//!   - `Bound`: Exclusive upper limit with checked conversions
//!   - `MarkingTable`: Bit-packed candidate table (dense or odd-only)
//!   - `integer_sqrt`: Exact outer loop bound
//!   - `SieveConfig` / `SieveConfigBuilder`: Configuration with validation
//!
//! - **Backends** (`backends/`): Engines running the sweeps
//!   - `SequentialEngine`: Always available
//!   - `RayonEngine`: Parallel inner sweep (feature `parallel`)
//!
//! - **Sieve** (`sieve`): Entry points
//!   - `sieve()` / `count_primes_below()`: Single-threaded, dense table
//!   - `Sieve`: Configured engine + layout + metrics
//!   - `SievedTable`: Finished table for in-range primality queries
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Every result `p` satisfies `1 < p < bound`, ascending
//! - **INVARIANT-2**: A value below the bound is returned iff it is prime
//! - **INVARIANT-3**: A table slot cleared to composite is never revived
//!
//! ## Usage Example
//!
//! ```
//! use prime_sieve::{sieve, Backend, Sieve, SieveConfigBuilder, TableLayout};
//!
//! assert_eq!(sieve(30).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//!
//! let config = SieveConfigBuilder::new()
//!     .backend(Backend::Sequential)
//!     .layout(TableLayout::OddOnly)
//!     .build()
//!     .unwrap();
//! let table = Sieve::new(config).unwrap().table(100usize).unwrap();
//! assert!(table.is_prime(97).unwrap());
//! assert_eq!(table.count(), 25);
//! ```

pub mod backends;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod sieve;

// Re-exports for convenience
pub use backends::{auto_detect, create_engine, Backend, EngineInfo, SieveEngine, SweepStats};
pub use domain::{Bound, MarkingTable, SieveConfig, SieveConfigBuilder, TableLayout};
pub use error::SieveError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use sieve::{count_primes_below, sieve, Sieve, SievedTable};
