//! Domain Layer - Pure sieve logic
//!
//! This layer contains:
//! - Bound conversions and validation
//! - Integer square root for the outer loop
//! - Bit-packed marking table (dense and odd-only layouts)
//! - Sieve configuration
//!
//! RULES:
//! - No I/O operations
//! - No threading; parallel sweeps live in `backends/`

pub mod bound;
pub mod config;
pub mod marking_table;
pub mod root;

pub use bound::Bound;
pub use config::{SieveConfig, SieveConfigBuilder, DEFAULT_MAX_TABLE_BITS, DEFAULT_PARALLEL_THRESHOLD};
pub use marking_table::{MarkingTable, Sweep, TableLayout};
pub use root::integer_sqrt;
