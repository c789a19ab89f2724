//! Dictionary sources - static industry and area files, local or remote

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entities::{AreaNode, Category};
use crate::domain::ports::DictionarySource;
use crate::error::{SettingsError, SettingsResult};

use super::api::{build_client, USER_AGENT};

/// Where a dictionary lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryLocation {
    File(PathBuf),
    Url(String),
}

impl DictionaryLocation {
    /// `http://` and `https://` are URLs, anything else is a path
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DictionaryLocation::Url(trimmed.to_string())
        } else {
            DictionaryLocation::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for DictionaryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryLocation::File(path) => write!(f, "{}", path.display()),
            DictionaryLocation::Url(url) => f.write_str(url),
        }
    }
}

/// Dictionary pair read from files or URLs
pub struct StaticDictionaries {
    industries: DictionaryLocation,
    areas: DictionaryLocation,
    client: Client,
}

impl StaticDictionaries {
    pub fn new(
        industries: DictionaryLocation,
        areas: DictionaryLocation,
        timeout: Duration,
    ) -> SettingsResult<Self> {
        let client = build_client(timeout, USER_AGENT, "dictionaries")?;
        Ok(Self {
            industries,
            areas,
            client,
        })
    }

    fn read(&self, location: &DictionaryLocation, dictionary: &'static str) -> SettingsResult<String> {
        let unavailable = |message: String| SettingsError::DictionaryUnavailable {
            dictionary,
            message,
        };

        match location {
            DictionaryLocation::File(path) => {
                fs::read_to_string(path).map_err(|e| unavailable(format!("{}: {}", path.display(), e)))
            }
            DictionaryLocation::Url(url) => {
                let response = self
                    .client
                    .get(url)
                    .send()
                    .map_err(|e| unavailable(e.to_string()))?;
                if !response.status().is_success() {
                    return Err(unavailable(format!("{} returned HTTP {}", url, response.status())));
                }
                response.text().map_err(|e| unavailable(e.to_string()))
            }
        }
    }

    fn load<T: DeserializeOwned>(
        &self,
        location: &DictionaryLocation,
        dictionary: &'static str,
    ) -> SettingsResult<Vec<T>> {
        let body = self.read(location, dictionary)?;
        let records: Vec<T> = parse_dictionary(&body, &location.to_string())?;
        tracing::debug!(dictionary, source = %location, records = records.len(), "dictionary loaded");
        Ok(records)
    }
}

/// Parse a dictionary body.
///
/// Accepts a bare array, or an object with a single array field such as
/// `{"areas": [...]}`.
pub fn parse_dictionary<T: DeserializeOwned>(body: &str, source_name: &str) -> SettingsResult<Vec<T>> {
    let decode = |e: serde_json::Error| SettingsError::Decode {
        source_name: source_name.to_string(),
        message: e.to_string(),
    };

    let value: Value = serde_json::from_str(body).map_err(decode)?;
    let list = match value {
        Value::Object(fields) if fields.len() == 1 && fields.values().all(Value::is_array) => {
            fields.into_iter().next().map(|(_, inner)| inner).unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(list).map_err(decode)
}

impl DictionarySource for StaticDictionaries {
    fn industries(&self) -> SettingsResult<Vec<Category>> {
        self.load(&self.industries, "industries")
    }

    fn areas(&self) -> SettingsResult<Vec<AreaNode>> {
        self.load(&self.areas, "areas")
    }
}
