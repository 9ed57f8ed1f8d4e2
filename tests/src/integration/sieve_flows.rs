//! # Sieve Flows
//!
//! Public entry points from bound to result sequence:
//!
//! 1. **Free functions**: `sieve()` and `count_primes_below()`
//! 2. **Configured sieve**: config loaded from JSON, validated, then run
//! 3. **Failure surfaces**: bad bounds, oversized tables, bad config

#[cfg(test)]
mod tests {
    use prime_sieve::{
        count_primes_below, sieve, Backend, Sieve, SieveConfig, SieveConfigBuilder, SieveError,
        TableLayout,
    };

    use crate::common::{init_tracing, is_prime_by_trial_division, PRIMES_BELOW_100};

    // =============================================================================
    // FREE FUNCTIONS
    // =============================================================================

    #[test]
    fn test_reference_scenarios() {
        init_tracing();

        assert!(sieve(0).unwrap().is_empty());
        assert!(sieve(1).unwrap().is_empty());
        assert!(sieve(2).unwrap().is_empty());
        assert_eq!(sieve(3).unwrap(), vec![2]);
        assert_eq!(sieve(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(
            sieve(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
        assert_eq!(sieve(100).unwrap(), PRIMES_BELOW_100.to_vec());
    }

    #[test]
    fn test_bound_types_accepted() {
        let expected = vec![2, 3, 5, 7];
        assert_eq!(sieve(10u8).unwrap(), expected);
        assert_eq!(sieve(10u32).unwrap(), expected);
        assert_eq!(sieve(10u64).unwrap(), expected);
        assert_eq!(sieve(10i64).unwrap(), expected);
        assert_eq!(sieve(10usize).unwrap(), expected);
        assert_eq!(sieve(10.0f32).unwrap(), expected);
    }

    #[test]
    fn test_oracle_agreement_up_to_ten_thousand() {
        let primes = sieve(10_000).unwrap();
        let oracle: Vec<usize> = (0..10_000)
            .filter(|&n| is_prime_by_trial_division(n))
            .collect();
        assert_eq!(primes, oracle);
        assert_eq!(count_primes_below(10_000).unwrap(), 1_229);
    }

    #[test]
    fn test_invalid_arguments_return_no_partial_result() {
        for result in [sieve(-1), sieve(-1_000_000), sieve(i32::MIN)] {
            assert!(matches!(result, Err(SieveError::InvalidArgument { .. })));
        }
        for result in [sieve(0.5), sieve(-2.0), sieve(f64::INFINITY)] {
            assert!(matches!(result, Err(SieveError::InvalidArgument { .. })));
        }
        assert!(count_primes_below(-7).is_err());
    }

    // =============================================================================
    // CONFIGURED SIEVE
    // =============================================================================

    #[test]
    fn test_config_from_json_drives_sieve() {
        init_tracing();

        let config: SieveConfig = serde_json::from_str(
            r#"{
                "backend": "sequential",
                "layout": "odd_only",
                "max_table_bits": 100000,
                "parallel_threshold": 4096
            }"#,
        )
        .expect("config should parse");

        let sieve = Sieve::new(config).expect("config should validate");
        assert_eq!(sieve.backend(), Backend::Sequential);
        assert_eq!(sieve.count_below(100_000usize).unwrap(), 9_592);

        // 200_000 odd-only needs 100_000 bits: exactly at the cap
        assert!(sieve.count_below(200_001usize).is_ok());
        assert!(matches!(
            sieve.count_below(200_002usize),
            Err(SieveError::ResourceExhaustion { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let result = SieveConfigBuilder::new().max_table_bits(0).build();
        assert!(matches!(result, Err(SieveError::InvalidConfig(_))));

        let config = SieveConfig {
            parallel_threshold: 0,
            ..Default::default()
        };
        assert!(Sieve::new(config).is_err());
    }

    #[test]
    fn test_sieved_table_answers_in_range_queries() {
        let sieve = Sieve::new(
            SieveConfigBuilder::new()
                .layout(TableLayout::OddOnly)
                .build()
                .unwrap(),
        )
        .unwrap();

        let table = sieve.table(1_000usize).unwrap();
        for n in 0..1_000 {
            assert_eq!(table.is_prime(n).unwrap(), is_prime_by_trial_division(n), "{n}");
        }
        assert!(matches!(
            table.is_prime(1_000),
            Err(SieveError::OutOfRange { value: 1_000, bound: 1_000 })
        ));
        assert_eq!(table.primes().len(), table.count());
    }
}
