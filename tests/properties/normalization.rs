//! Property tests for id normalization at the API boundary.

use proptest::prelude::*;
use serde_json::{json, Value};

use aurora_settings::domain::value_objects::NodeId;
use aurora_settings::infrastructure::api::normalize_ids;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a numeric id and its text form normalize to the same NodeId.
    #[test]
    fn property_number_and_string_ids_agree(id in 0u32..10_000_000) {
        let from_number = normalize_ids(Some(&json!(id)), "industry");
        let from_string = normalize_ids(Some(&json!(id.to_string())), "industry");

        prop_assert_eq!(&from_number, &from_string);
        prop_assert_eq!(from_number, vec![NodeId::from_int(i64::from(id))]);
    }

    /// PROPERTY: a JSON-encoded array yields the same ids as the native array.
    #[test]
    fn property_encoded_array_matches_native(ids in proptest::collection::vec(0u32..500, 0..20)) {
        let native = normalize_ids(Some(&json!(ids)), "industry");
        let encoded_text = serde_json::to_string(&ids).unwrap();
        let encoded = normalize_ids(Some(&Value::String(encoded_text)), "industry");

        prop_assert_eq!(&native, &encoded);

        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(native.len(), unique.len());
    }

    /// PROPERTY: arbitrary text never panics and never yields blank ids.
    #[test]
    fn property_arbitrary_text_never_panics(text in ".{0,64}") {
        let ids = normalize_ids(Some(&Value::String(text)), "search_areas");
        prop_assert!(ids.iter().all(|id| !id.is_empty()));
    }
}
