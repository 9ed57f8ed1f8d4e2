//! Error types for the prime sieve

use crate::backends::Backend;
use thiserror::Error;

/// Errors that can occur while sieving
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SieveError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Marking table of {requested_bits} bits cannot be allocated (limit: {limit_bits:?})")]
    ResourceExhaustion {
        requested_bits: usize,
        limit_bits: Option<u64>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Value {value} is outside the swept range 0..{bound}")]
    OutOfRange { value: usize, bound: usize },

    #[error("Backend not compiled in: {0}")]
    BackendUnavailable(Backend),
}

impl SieveError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        SieveError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl From<std::convert::Infallible> for SieveError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
