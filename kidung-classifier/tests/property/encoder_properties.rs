//! Property tests for the label encoder's sentinel and round-trip guarantees.

use kidung_classifier::LabelEncoder;
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_encode_roundtrips_every_code(values in prop::collection::vec("[A-Za-z_]{1,12}", 0..20)) {
        let encoder = LabelEncoder::fit(values);
        for code in 0..encoder.len() {
            let label = encoder.decode(code).expect("code in fitted range").to_string();
            prop_assert_eq!(encoder.encode(&label), code);
        }
    }

    #[test]
    fn codes_cover_exactly_the_fitted_range(values in prop::collection::vec("[A-Za-z_]{1,12}", 0..20)) {
        let encoder = LabelEncoder::fit(values);
        let mut seen = vec![false; encoder.len()];
        for class in encoder.classes() {
            let code = encoder.encode(class);
            prop_assert!(code < encoder.len());
            prop_assert!(!seen[code], "duplicate code {}", code);
            seen[code] = true;
        }
        prop_assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn unseen_values_never_fail_and_land_on_a_sentinel(
        values in prop::collection::vec("[a-z]{1,8}", 0..10),
        probe in "[A-Z]{9,16}",
    ) {
        // The probe's shape guarantees it was never fitted.
        let encoder = LabelEncoder::fit(values);
        let code = encoder.encode(&probe);
        prop_assert!(
            code == encoder.encode("unknown") || code == encoder.encode("None")
        );
    }

    #[test]
    fn sentinels_always_present(values in prop::collection::vec("[A-Za-z_]{1,12}", 0..20)) {
        let encoder = LabelEncoder::fit(values);
        prop_assert!(encoder.knows("None"));
        prop_assert!(encoder.knows("unknown"));
    }
}
