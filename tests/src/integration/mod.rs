//! # Integration Scenarios
//!
//! End-to-end checks against the public `prime_sieve` API only.

pub mod engine_agreement;
pub mod sieve_flows;
