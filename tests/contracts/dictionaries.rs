//! Dictionary file contracts (DICT-001 through DICT-002)

use std::time::Duration;

use aurora_settings::domain::entities::{AreaNode, Category, TreeIndex, TreeKind};
use aurora_settings::domain::ports::DictionarySource;
use aurora_settings::domain::value_objects::NodeId;
use aurora_settings::infrastructure::{parse_dictionary, DictionaryLocation, StaticDictionaries};

const INDUSTRIES_JSON: &str = r#"[
  {"id": "7", "name": "IT", "industries": [
    {"id": "7.540", "name": "Development"},
    {"id": 7541, "name": "QA"}
  ]},
  {"id": 29, "name": "Other"}
]"#;

const AREAS_JSON: &str = r#"[
  {"id": "113", "name": "Russia", "areas": [
    {"id": "1620", "name": "Mari El", "areas": [
      {"id": "1621", "name": "Yoshkar-Ola", "areas": []}
    ]}
  ]}
]"#;

/// CONTRACT DICT-001: dictionary JSON shapes and id normalization
mod format {
    use super::*;

    #[test]
    fn contract_industries_accept_string_and_numeric_ids() {
        let categories: Vec<Category> = parse_dictionary(INDUSTRIES_JSON, "industries.json").unwrap();
        let index = TreeIndex::from_categories(&categories);

        assert_eq!(index.len(), 4);
        assert!(index.contains(&NodeId::new("7541")));
        assert!(index.contains(&NodeId::new("29")));
        let other = index.lookup(&NodeId::new("29")).unwrap();
        assert!(index.node(other).is_leaf());
    }

    #[test]
    fn contract_areas_nest_without_limit() {
        let areas: Vec<AreaNode> = parse_dictionary(AREAS_JSON, "areas.json").unwrap();
        let index = TreeIndex::from_areas(&areas);

        let city = index.lookup(&NodeId::new("1621")).unwrap();
        assert_eq!(index.node(city).depth, 2);
        assert_eq!(index.breadcrumb(city, " / "), "Russia / Mari El");
    }

    #[test]
    fn contract_areas_may_be_wrapped_in_an_object() {
        let wrapped = format!("{{\"areas\": {}}}", AREAS_JSON);
        let bare: Vec<AreaNode> = parse_dictionary(AREAS_JSON, "areas.json").unwrap();
        let unwrapped: Vec<AreaNode> = parse_dictionary(&wrapped, "areas.json").unwrap();
        assert_eq!(unwrapped, bare);
    }

    #[test]
    fn contract_malformed_dictionary_is_a_decode_error() {
        let err = parse_dictionary::<Category>("{\"id\": 1}", "industries.json").unwrap_err();
        assert!(err.to_string().contains("industries.json"));
    }
}

/// CONTRACT DICT-002: file locations load, missing files degrade
mod sources {
    use super::*;

    #[test]
    fn contract_file_dictionaries_load_into_trees() {
        let dir = tempfile::tempdir().unwrap();
        let industries = dir.path().join("industries.json");
        let areas = dir.path().join("areas.json");
        std::fs::write(&industries, INDUSTRIES_JSON).unwrap();
        std::fs::write(&areas, AREAS_JSON).unwrap();

        let source = StaticDictionaries::new(
            DictionaryLocation::File(industries),
            DictionaryLocation::File(areas),
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(source.load_index(TreeKind::Industries).unwrap().len(), 4);
        assert_eq!(source.load_index(TreeKind::Areas).unwrap().len(), 3);
    }

    #[test]
    fn contract_missing_file_is_reported_as_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = StaticDictionaries::new(
            DictionaryLocation::File(dir.path().join("nope.json")),
            DictionaryLocation::File(dir.path().join("nope.json")),
            Duration::from_secs(1),
        )
        .unwrap();

        let err = source.load_index(TreeKind::Areas).unwrap_err();
        assert!(err.to_string().contains("could not load areas dictionary"));
    }
}
