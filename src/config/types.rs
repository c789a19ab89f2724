//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::TreeKind;
use crate::domain::services::{TreeViewOptions, DEFAULT_DEBOUNCE_MS, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_LIMIT};
use crate::error::SettingsResult;

use super::loader::{self, ConfigWarning};

/// Settings API endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.aurora-career.ru".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Signed access parameters, normally passed on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessConfig {
    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub sign: Option<String>,
}

/// Dictionary locations, each a file path or an http(s) URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_industries")]
    pub industries: String,

    #[serde(default = "default_areas")]
    pub areas: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            industries: default_industries(),
            areas: default_areas(),
        }
    }
}

fn default_industries() -> String {
    "industries.json".to_string()
}

fn default_areas() -> String {
    "areas.json".to_string()
}

/// Tree presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_breadcrumb_separator")]
    pub breadcrumb_separator: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_limit: default_search_limit(),
            debounce_ms: default_debounce_ms(),
            breadcrumb_separator: default_breadcrumb_separator(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_breadcrumb_separator() -> String {
    " / ".to_string()
}

/// Unicode icon mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub unicode: UnicodeMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub access: AccessConfig,

    #[serde(default)]
    pub dictionaries: DictionaryConfig,

    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SettingsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (AURORA_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.tree.debounce_ms)
    }

    /// View options for one tree. Industries are never paginated; areas
    /// use the configured page size and flat search.
    pub fn tree_options(&self, kind: TreeKind) -> TreeViewOptions {
        let mut options = TreeViewOptions::for_kind(kind);
        if options.page_size.is_some() {
            options.page_size = Some(self.tree.page_size.max(1));
        }
        options.search_limit = self.tree.search_limit.max(1);
        options.breadcrumb_separator = self.tree.breadcrumb_separator.clone();
        options
    }
}
