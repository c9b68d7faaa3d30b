//! Property-based tests for day-key derivation.
//!
//! These tests verify that every well-formed date-input value, padded or
//! not, yields a correctly zero-padded five-character "MM-DD" key.

use proptest::prelude::*;

use histoday::services::date_service::{DateService, DateServiceTrait};

/// Strategy for generating (year, month, day) triples with plausible
/// calendar components.
fn arb_ymd() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=9999, 1u32..=12, 1u32..=31)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // **Property: zero-padded key from unpadded input**
    //
    // *For any* plausible year/month/day, the unpadded "Y-M-D" rendering
    // SHALL yield the zero-padded "MM-DD" key.
    #[test]
    fn unpadded_input_yields_padded_key((year, month, day) in arb_ymd()) {
        let service = DateService::new();
        let input = format!("{}-{}-{}", year, month, day);

        let key = service
            .to_compact_day_key(&input)
            .expect("three-part input must yield a key");
        prop_assert_eq!(key.len(), 5);
        prop_assert_eq!(key, format!("{:02}-{:02}", month, day));
    }

    // **Property: padded input is preserved**
    //
    // Already-padded "YYYY-MM-DD" input SHALL yield the same key as its
    // unpadded form.
    #[test]
    fn padded_and_unpadded_inputs_agree((year, month, day) in arb_ymd()) {
        let service = DateService::new();
        let padded = format!("{:04}-{:02}-{:02}", year, month, day);
        let unpadded = format!("{}-{}-{}", year, month, day);

        prop_assert_eq!(
            service.to_compact_day_key(&padded),
            service.to_compact_day_key(&unpadded)
        );
    }

    // **Property: short inputs never produce a key**
    //
    // Input with fewer than three '-'-separated parts SHALL yield `None`,
    // never a panic.
    #[test]
    fn two_part_input_yields_none(month in 1u32..=12, day in 1u32..=31) {
        let service = DateService::new();
        let input = format!("{:02}-{:02}", month, day);

        prop_assert_eq!(service.to_compact_day_key(&input), None);
    }
}
