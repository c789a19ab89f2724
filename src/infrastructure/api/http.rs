//! HTTP implementation of the settings API (blocking reqwest)

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

use crate::domain::entities::UserSettings;
use crate::domain::ports::{Credentials, SettingsApi, SettingsUpdate};
use crate::error::{SettingsError, SettingsResult};

use super::wire::{normalize_settings, ApiEnvelope, GetRequest, UpdateRequest};

const GET_PATH: &str = "/api/settings/get";
const UPDATE_PATH: &str = "/api/settings/update";
pub(crate) const USER_AGENT: &str = concat!("aurora-settings/", env!("CARGO_PKG_VERSION"));

/// Blocking client shared by the settings API and remote dictionaries.
///
/// `target` names what the client is for in the error.
pub fn build_client(timeout: Duration, user_agent: &str, target: &str) -> SettingsResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| SettingsError::Transport {
            url: target.to_string(),
            message: format!("could not set up the HTTP client: {}", e),
        })
}

pub struct HttpSettingsApi {
    client: Client,
    base_url: String,
}

impl HttpSettingsApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SettingsResult<Self> {
        let base_url = base_url.into();
        let client = build_client(timeout, USER_AGENT, &base_url)?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, url: &str, request: RequestBuilder) -> SettingsResult<ApiEnvelope> {
        tracing::debug!(url, "settings request");
        let response = request.send().map_err(|err| SettingsError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        })?;

        let status = response.status();
        let body = response.text().map_err(|err| SettingsError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        })?;

        serde_json::from_str::<ApiEnvelope>(&body).map_err(|err| {
            if status.is_success() {
                SettingsError::Decode {
                    source_name: url.to_string(),
                    message: err.to_string(),
                }
            } else {
                SettingsError::Transport {
                    url: url.to_string(),
                    message: format!("HTTP {status}"),
                }
            }
        })
    }
}

impl SettingsApi for HttpSettingsApi {
    fn fetch(&self, credentials: &Credentials) -> SettingsResult<UserSettings> {
        let url = self.url(GET_PATH);
        let body = GetRequest {
            user_id: credentials.user_id,
            sign: &credentials.sign,
        };
        let envelope = self.send(&url, self.client.post(&url).json(&body))?;
        let settings = envelope.into_result()?.unwrap_or(Value::Null);
        Ok(normalize_settings(&settings))
    }

    fn update(&self, credentials: &Credentials, update: &SettingsUpdate) -> SettingsResult<()> {
        let url = self.url(UPDATE_PATH);
        let body = UpdateRequest {
            user_id: credentials.user_id,
            sign: &credentials.sign,
            update,
        };
        let envelope = self.send(&url, self.client.post(&url).json(&body))?;
        envelope.into_result().map(|_| ())
    }
}
