use period_core::{detect, detect_period, Lcg, LcgParams, MembershipIndex, NOT_FOUND};
use proptest::prelude::*;

/// Values generated at steps 1..=n, index 0 holding step 1
fn generated(params: LcgParams, seed: u64, n: u64) -> Vec<u64> {
    Lcg::new(params, seed).take(n as usize).collect()
}

proptest! {
    #[test]
    fn period_is_bounded_by_modulus(
        a in 0u64..1000,
        c in 0u64..1000,
        m in 1u64..2000,
        seed in 0u64..5000,
        table_size in 1usize..64,
    ) {
        let params = LcgParams::new(a, c, m).unwrap();
        let period = detect_period(params, seed, table_size).unwrap();
        prop_assert!(period >= 1);
        prop_assert!(period <= m);
    }

    #[test]
    fn repeat_matches_first_occurrence(
        a in 0u64..500,
        c in 0u64..500,
        m in 1u64..800,
        seed in 0u64..2000,
    ) {
        let params = LcgParams::new(a, c, m).unwrap();
        let detection = detect(params, seed, 17).unwrap();
        let values = generated(params, seed, detection.repeat_step);

        let first = (detection.first_step - 1) as usize;
        let repeat = (detection.repeat_step - 1) as usize;
        prop_assert_eq!(values[first], values[repeat]);
        prop_assert_eq!(values[repeat], detection.repeated_value);

        // Every value before the repeat is distinct
        let mut seen = std::collections::HashSet::new();
        for value in &values[..repeat] {
            prop_assert!(seen.insert(*value));
        }
        prop_assert_eq!(seen.len(), detection.distinct_values);
    }

    #[test]
    fn table_size_does_not_change_result(
        a in 0u64..500,
        c in 0u64..500,
        m in 1u64..800,
        seed in 0u64..2000,
        table_size in 2usize..1000,
    ) {
        let params = LcgParams::new(a, c, m).unwrap();
        let single = detect(params, seed, 1).unwrap();
        let many = detect(params, seed, table_size).unwrap();
        prop_assert_eq!(single.period, many.period);
        prop_assert_eq!(single.first_step, many.first_step);
    }

    #[test]
    fn search_finds_what_was_inserted(values in proptest::collection::hash_set(0u64..10_000, 1..200)) {
        let mut index = MembershipIndex::new(7).unwrap();
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(index.insert(*value, i as u64 + 1).unwrap(), 1);
        }
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(index.search(*value), i as u64 + 1);
        }
        prop_assert_eq!(index.search(10_000), NOT_FOUND);
    }
}

#[test]
fn detection_is_idempotent() {
    let params = LcgParams::new(1103515245, 12345, 65_536).unwrap();
    let first = detect(params, 1, 500).unwrap();
    let second = detect(params, 1, 500).unwrap();
    assert_eq!(first, second);
}
