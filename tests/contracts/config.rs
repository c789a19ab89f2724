//! Configuration contracts (CONFIG-001 through CONFIG-002)

use aurora_settings::config::{Config, PROJECT_CONFIG};

/// CONTRACT CONFIG-001: the project file is read from the working directory
/// and missing keys keep their defaults
mod project_file {
    use super::*;

    #[test]
    fn contract_project_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG),
            "[tree]\npage_size = 15\nbreadcrumb_separator = \" > \"\n",
        )
        .unwrap();

        let config = Config::load_or_default(Some(dir.path()));

        assert_eq!(config.tree.page_size, 15);
        assert_eq!(config.tree.breadcrumb_separator, " > ");
        assert_eq!(config.tree.search_limit, 50);
        assert_eq!(config.tree.debounce_ms, 300);
    }

    #[test]
    fn contract_broken_project_config_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG), "[tree\npage_size = ").unwrap();

        assert!(Config::load(&dir.path().join(PROJECT_CONFIG)).is_err());
        let _ = Config::load_or_default(Some(dir.path()));
    }
}

/// CONTRACT CONFIG-002: unknown keys warn with a suggestion instead of failing
mod unknown_keys {
    use super::*;

    #[test]
    fn contract_typo_gets_a_suggestion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG);
        std::fs::write(&path, "[tree]\npage_sise = 10\n").unwrap();

        let (config, warnings) = Config::load_with_warnings(&path).unwrap();

        assert_eq!(config.tree.page_size, 30);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "page_sise");
        assert_eq!(warnings[0].line, Some(2));
        assert_eq!(warnings[0].suggestion.as_deref(), Some("page_size"));
    }
}
