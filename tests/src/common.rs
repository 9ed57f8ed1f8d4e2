//! Shared fixtures for the test suite

use tracing_subscriber::EnvFilter;

/// Install a `RUST_LOG`-driven subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Trial division, used as the oracle for sieve results
pub fn is_prime_by_trial_division(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// First primes, for fixed-table comparisons
pub const PRIMES_BELOW_100: [usize; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_matches_fixed_table() {
        let oracle: Vec<usize> = (0..100).filter(|&n| is_prime_by_trial_division(n)).collect();
        assert_eq!(oracle, PRIMES_BELOW_100.to_vec());
    }
}
