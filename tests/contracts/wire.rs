//! Settings API contracts (WIRE-001 through WIRE-004)

use serde_json::json;

use aurora_settings::domain::ports::SettingsUpdate;
use aurora_settings::domain::value_objects::{Experience, Salary};
use aurora_settings::infrastructure::api::wire::{ApiEnvelope, GetRequest, UpdateRequest};
use aurora_settings::infrastructure::api::{normalize_ids, normalize_settings};

use crate::common::*;

/// CONTRACT WIRE-001: request bodies carry the access pair next to the payload
mod requests {
    use super::*;

    #[test]
    fn contract_get_request_body() {
        let body = serde_json::to_value(GetRequest {
            user_id: 42,
            sign: "signed",
        })
        .unwrap();
        assert_eq!(body, json!({"user_id": 42, "sign": "signed"}));
    }

    #[test]
    fn contract_update_request_body_is_flat() {
        let update = SettingsUpdate {
            salary: Salary::new(90_000).unwrap(),
            experience: Experience::Between3And6,
            industry: ids(&["7", "1.1"]),
            search_areas: ids(&["113"]),
        };
        let body = serde_json::to_value(UpdateRequest {
            user_id: 42,
            sign: "signed",
            update: &update,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "user_id": 42,
                "sign": "signed",
                "salary": 90000,
                "experience": "between3And6",
                "industry": ["7", "1.1"],
                "search_areas": ["113"],
            })
        );
    }
}

/// CONTRACT WIRE-002: only `status == "ok"` is success
mod envelope {
    use super::*;

    fn envelope(value: serde_json::Value) -> ApiEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn contract_ok_status_returns_settings() {
        let settings = envelope(json!({"status": "ok", "settings": {"salary": 1}}))
            .into_result()
            .unwrap();
        assert_eq!(settings, Some(json!({"salary": 1})));
    }

    #[test]
    fn contract_error_status_carries_server_message() {
        let err = envelope(json!({"status": "error", "error": "invalid sign"}))
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("invalid sign"));
    }

    #[test]
    fn contract_error_without_message_uses_default() {
        let err = envelope(json!({"status": "fail"})).into_result().unwrap_err();
        assert!(err.to_string().contains("unknown error"));
    }
}

/// CONTRACT WIRE-003: every historical id shape maps onto one list
mod id_shapes {
    use super::*;

    #[test]
    fn contract_array_of_mixed_numbers_and_strings() {
        assert_eq!(
            normalize_ids(Some(&json!([7, "7.1", 7])), "industry"),
            ids(&["7", "7.1"])
        );
    }

    #[test]
    fn contract_scalar_id() {
        assert_eq!(normalize_ids(Some(&json!(113)), "search_areas"), ids(&["113"]));
        assert_eq!(normalize_ids(Some(&json!("113")), "search_areas"), ids(&["113"]));
    }

    #[test]
    fn contract_json_encoded_array_and_mapping() {
        assert_eq!(
            normalize_ids(Some(&json!("[\"7\", 9]")), "industry"),
            ids(&["7", "9"])
        );
        assert_eq!(
            normalize_ids(Some(&json!("{\"0\": \"7.1\", \"1\": 7.2}")), "industry"),
            ids(&["7.1", "7.2"])
        );
    }

    #[test]
    fn contract_malformed_shapes_give_empty_selection() {
        assert!(normalize_ids(Some(&json!("[7, ")), "industry").is_empty());
        assert!(normalize_ids(Some(&json!(true)), "industry").is_empty());
        assert!(normalize_ids(Some(&json!(null)), "industry").is_empty());
        assert!(normalize_ids(None, "industry").is_empty());
    }
}

/// CONTRACT WIRE-004: settings object normalization with legacy fallbacks
mod settings {
    use super::*;

    #[test]
    fn contract_full_settings_object() {
        let settings = normalize_settings(&json!({
            "salary": "150000",
            "experience": "moreThan6",
            "industry": "[\"7\"]",
            "search_areas": [1, 2],
        }));

        assert_eq!(settings.salary.value(), 150_000);
        assert_eq!(settings.experience, Experience::MoreThan6);
        assert_eq!(settings.industry, ids(&["7"]));
        assert_eq!(settings.search_areas, ids(&["1", "2"]));
    }

    #[test]
    fn contract_legacy_search_area_scalar() {
        let settings = normalize_settings(&json!({"search_area": 113}));
        assert_eq!(settings.search_areas, ids(&["113"]));
    }

    #[test]
    fn contract_missing_fields_fall_back_to_defaults() {
        let settings = normalize_settings(&json!({}));
        assert!(!settings.salary.is_set());
        assert_eq!(settings.experience, Experience::NoExperience);
        assert!(settings.industry.is_empty());
        assert!(settings.search_areas.is_empty());
    }
}
