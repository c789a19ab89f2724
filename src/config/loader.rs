//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

use super::types::{Config, UnicodeMode};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG: &str = "aurora.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SettingsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SettingsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First config file found: `./aurora.toml`, then the user config.
/// Falls back to defaults; env overrides apply on top either way.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                tracing::debug!(path = %path.display(), "config loaded");
                return with_env_overrides(config, |key| std::env::var(key).ok());
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
            }
        }
    }

    with_env_overrides(Config::default(), |key| std::env::var(key).ok())
}

/// `<config_dir>/aurora-settings/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aurora-settings").join("config.toml"))
}

/// Apply environment variable overrides (AURORA_* prefix).
///
/// `get_env` is injected so tests do not touch the process environment.
pub fn with_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_blank("AURORA_API_BASE_URL") {
        config.api.base_url = url.trim().to_string();
    }

    if let Some(raw) = non_blank("AURORA_USER_ID") {
        match raw.trim().parse::<i64>() {
            Ok(id) => config.access.user_id = Some(id),
            Err(_) => tracing::warn!(value = %raw, "AURORA_USER_ID is not a number, ignoring"),
        }
    }

    if let Some(sign) = non_blank("AURORA_SIGN") {
        config.access.sign = Some(sign);
    }

    if let Some(path) = non_blank("AURORA_INDUSTRIES") {
        config.dictionaries.industries = path;
    }

    if let Some(path) = non_blank("AURORA_AREAS") {
        config.dictionaries.areas = path;
    }

    if let Some(mode) = non_blank("AURORA_UNICODE") {
        config.output.unicode = match mode.to_lowercase().as_str() {
            "always" | "1" | "true" => UnicodeMode::Always,
            "never" | "0" | "false" => UnicodeMode::Never,
            _ => UnicodeMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "api",
        "base_url",
        "timeout_secs",
        "access",
        "user_id",
        "sign",
        "dictionaries",
        "industries",
        "areas",
        "tree",
        "page_size",
        "search_limit",
        "debounce_ms",
        "breadcrumb_separator",
        "output",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
