//! # Engine Agreement
//!
//! Every backend and layout must return the same sequence as the plain
//! `sieve()` entry point, including bounds that straddle table word edges and
//! sweeps wide enough to take the Rayon path.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use prime_sieve::{
        sieve, Backend, Metrics, Sieve, SieveConfig, SieveConfigBuilder, TableLayout,
    };
    use proptest::prelude::*;
    use rand::Rng;

    use crate::common::init_tracing;

    fn configured(backend: Backend, layout: TableLayout, parallel_threshold: usize) -> Sieve {
        let config = SieveConfigBuilder::new()
            .backend(backend)
            .layout(layout)
            .parallel_threshold(parallel_threshold)
            .build()
            .expect("backend should be compiled in");
        Sieve::new(config).expect("config is valid")
    }

    fn every_configuration(parallel_threshold: usize) -> Vec<Sieve> {
        let mut sieves = Vec::new();
        for backend in [Backend::Sequential, Backend::Rayon] {
            if !backend.is_available() {
                continue;
            }
            for layout in [TableLayout::Dense, TableLayout::OddOnly] {
                sieves.push(configured(backend, layout, parallel_threshold));
            }
        }
        sieves
    }

    #[test]
    fn test_word_edge_bounds() {
        init_tracing();

        let bounds: Vec<usize> = [63usize, 64, 65, 127, 128, 129, 4_095, 4_096, 4_097]
            .into_iter()
            .chain([2 * 64 + 1, 2 * 128 + 1, 2 * 4_096 + 1])
            .collect();

        for sieve_under_test in every_configuration(1) {
            for &bound in &bounds {
                assert_eq!(
                    sieve_under_test.primes_below(bound).unwrap(),
                    sieve(bound).unwrap(),
                    "{} / {} at bound {bound}",
                    sieve_under_test.backend(),
                    sieve_under_test.config().layout
                );
            }
        }
    }

    #[test]
    fn test_large_bound_all_engines() {
        init_tracing();

        let expected = sieve(2_000_000).unwrap();
        assert_eq!(expected.len(), 148_933);

        for sieve_under_test in every_configuration(1 << 12) {
            assert_eq!(sieve_under_test.primes_below(2_000_000usize).unwrap(), expected);
        }
    }

    #[test]
    fn test_random_bounds_all_engines() {
        let mut rng = rand::thread_rng();
        let sieves = every_configuration(64);

        for _ in 0..50 {
            let bound: usize = rng.gen_range(0..200_000);
            let expected = sieve(bound).unwrap();
            for sieve_under_test in &sieves {
                assert_eq!(sieve_under_test.primes_below(bound).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_shared_sieve_metrics_across_threads() {
        let metrics = Arc::new(Metrics::new());
        let sieve_under_test = Sieve::new(SieveConfig::default())
            .unwrap()
            .with_metrics(metrics.clone());
        let sieve_under_test = &sieve_under_test;

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(move || {
                    assert_eq!(sieve_under_test.count_below(100_000usize).unwrap(), 9_592);
                });
            }
        });

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.sieves_run, 8);
        assert_eq!(snapshot.primes_found, 8 * 9_592);
        assert_eq!(snapshot.requests_rejected, 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_configurations_agree(bound in 0usize..50_000, threshold in 1usize..10_000) {
            let expected = sieve(bound).unwrap();
            for sieve_under_test in every_configuration(threshold) {
                prop_assert_eq!(sieve_under_test.primes_below(bound).unwrap(), expected.clone());
            }
        }
    }
}
