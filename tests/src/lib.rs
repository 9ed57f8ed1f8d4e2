//! # Prime Sieve Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks per engine and layout
//! └── src/
//!     ├── common.rs     # Logging setup, reference primality check
//!     └── integration/  # End-to-end scenarios against the public API
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sieve-tests
//!
//! # With sieve logs
//! RUST_LOG=prime_sieve=debug cargo test -p sieve-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p sieve-tests
//! ```

pub mod common;
pub mod integration;
