//! Wire format of the settings endpoints and its normalization
//!
//! The server has shipped several shapes for the same fields over time:
//! `industry` as an array, a scalar, or a JSON-encoded string of either an
//! array or a mapping; areas as `search_areas` (array or scalar) or the
//! legacy scalar `search_area`. Everything is mapped into `Vec<NodeId>` here
//! so the core only ever sees one representation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::UserSettings;
use crate::domain::ports::SettingsUpdate;
use crate::domain::value_objects::{Experience, NodeId, Salary};
use crate::error::{SettingsError, SettingsResult};

/// Response envelope shared by both endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope {
    /// Anything other than `"ok"` is a rejection
    pub fn into_result(self) -> SettingsResult<Option<Value>> {
        if self.status == "ok" {
            Ok(self.settings)
        } else {
            Err(SettingsError::Api {
                message: self
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}

/// Body of `POST /api/settings/get`
#[derive(Debug, Serialize)]
pub struct GetRequest<'a> {
    pub user_id: i64,
    pub sign: &'a str,
}

/// Body of `POST /api/settings/update`
#[derive(Debug, Serialize)]
pub struct UpdateRequest<'a> {
    pub user_id: i64,
    pub sign: &'a str,
    #[serde(flatten)]
    pub update: &'a SettingsUpdate,
}

/// Normalize any accepted id shape into a deduplicated list.
///
/// Malformed input yields an empty list and a warning, never an error.
pub fn normalize_ids(value: Option<&Value>, field: &str) -> Vec<NodeId> {
    let mut out = Vec::new();
    if let Some(value) = value {
        collect_ids(value, field, &mut out, true);
    }

    let mut seen = std::collections::HashSet::new();
    out.retain(|id| seen.insert(id.clone()));
    out
}

fn collect_ids(value: &Value, field: &str, out: &mut Vec<NodeId>, allow_encoded: bool) {
    match value {
        Value::Null => {}
        Value::Number(_) => out.extend(NodeId::from_json(value)),
        Value::String(text) => {
            let trimmed = text.trim();
            let looks_encoded = trimmed.starts_with('[') || trimmed.starts_with('{');
            if looks_encoded && allow_encoded {
                match serde_json::from_str::<Value>(trimmed) {
                    Ok(decoded) => collect_ids(&decoded, field, out, false),
                    Err(err) => {
                        tracing::warn!(field, error = %err, "unparseable encoded id list, using empty selection");
                    }
                }
            } else if !trimmed.is_empty() {
                out.push(NodeId::new(trimmed));
            }
        }
        Value::Array(items) => {
            for item in items {
                match NodeId::from_json(item) {
                    Some(id) => out.push(id),
                    None if item.is_null() => {}
                    None => tracing::warn!(field, item = %item, "skipping non-scalar id"),
                }
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                match NodeId::from_json(item) {
                    Some(id) => out.push(id),
                    None => tracing::warn!(field, item = %item, "skipping non-scalar id"),
                }
            }
        }
        Value::Bool(_) => {
            tracing::warn!(field, value = %value, "unexpected id type, using empty selection");
        }
    }
}

/// Map the raw `settings` object onto [`UserSettings`]
pub fn normalize_settings(settings: &Value) -> UserSettings {
    let experience = settings
        .get("experience")
        .and_then(Value::as_str)
        .map(Experience::parse_lenient)
        .unwrap_or_default();

    let areas = match settings.get("search_areas") {
        Some(value) if !value.is_null() => Some(value),
        _ => settings.get("search_area"),
    };

    UserSettings {
        salary: Salary::from_json(settings.get("salary")),
        experience,
        industry: normalize_ids(settings.get("industry"), "industry"),
        search_areas: normalize_ids(areas, "search_areas"),
    }
}
