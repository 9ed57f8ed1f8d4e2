//! Sieve configuration and validation
//!
//! # Example
//!
//! ```
//! use prime_sieve::{Backend, SieveConfigBuilder, TableLayout};
//!
//! let config = SieveConfigBuilder::new()
//!     .backend(Backend::Sequential)
//!     .layout(TableLayout::OddOnly)
//!     .max_table_bits(1 << 20)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.layout, TableLayout::OddOnly);
//! ```

use serde::{Deserialize, Serialize};

use super::marking_table::TableLayout;
use crate::backends::Backend;
use crate::error::SieveError;

/// Default cap on marking table storage: 2^36 bits (8 GiB)
pub const DEFAULT_MAX_TABLE_BITS: u64 = 1 << 36;

/// Default minimum sweep span, in table bits, before Rayon is used
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Sieve configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    /// Engine running the sweeps
    pub backend: Backend,
    /// Marking table storage layout
    pub layout: TableLayout,
    /// Largest marking table, in bits, a single call may allocate
    pub max_table_bits: u64,
    /// Sweeps narrower than this many table bits run on one thread
    pub parallel_threshold: usize,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            layout: TableLayout::Dense,
            max_table_bits: DEFAULT_MAX_TABLE_BITS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SieveConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), SieveError> {
        if self.max_table_bits == 0 {
            return Err(SieveError::InvalidConfig(
                "max_table_bits cannot be 0".to_string(),
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(SieveError::InvalidConfig(
                "parallel_threshold cannot be 0".to_string(),
            ));
        }

        if !self.backend.is_available() {
            return Err(SieveError::BackendUnavailable(self.backend));
        }

        Ok(())
    }

    /// Builder-style method to set the backend
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Builder-style method to set the table layout
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Builder-style method to set the table size cap
    pub fn with_max_table_bits(mut self, bits: u64) -> Self {
        self.max_table_bits = bits;
        self
    }

    /// Builder-style method to set the parallel sweep threshold
    pub fn with_parallel_threshold(mut self, bits: usize) -> Self {
        self.parallel_threshold = bits;
        self
    }
}

/// Builder for SieveConfig with validation
#[derive(Default)]
pub struct SieveConfigBuilder {
    backend: Option<Backend>,
    layout: Option<TableLayout>,
    max_table_bits: Option<u64>,
    parallel_threshold: Option<usize>,
}

impl SieveConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine backend
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the marking table layout
    pub fn layout(mut self, layout: TableLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the largest table, in bits, a call may allocate
    pub fn max_table_bits(mut self, bits: u64) -> Self {
        self.max_table_bits = Some(bits);
        self
    }

    /// Set the minimum sweep span handed to Rayon
    pub fn parallel_threshold(mut self, bits: usize) -> Self {
        self.parallel_threshold = Some(bits);
        self
    }

    /// Build the SieveConfig, validating all parameters
    pub fn build(self) -> Result<SieveConfig, SieveError> {
        let defaults = SieveConfig::default();

        let config = SieveConfig {
            backend: self.backend.unwrap_or(defaults.backend),
            layout: self.layout.unwrap_or(defaults.layout),
            max_table_bits: self.max_table_bits.unwrap_or(defaults.max_table_bits),
            parallel_threshold: self.parallel_threshold.unwrap_or(defaults.parallel_threshold),
        };

        config.validate()?;
        Ok(config)
    }
}
