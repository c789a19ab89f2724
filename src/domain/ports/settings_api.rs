//! SettingsApi port - abstraction over the remote settings endpoints
//!
//! The HTTP client in the infrastructure layer implements this; tests use an
//! in-memory fake.

use serde::Serialize;

use crate::domain::entities::UserSettings;
use crate::domain::value_objects::{Experience, NodeId, Salary};
use crate::error::{SettingsError, SettingsResult};

/// Signed access parameters carried by the bot's settings link
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: i64,
    pub sign: String,
}

impl Credentials {
    /// Both parameters are required before any request is made
    pub fn new(user_id: Option<i64>, sign: Option<String>) -> SettingsResult<Self> {
        let user_id = user_id.ok_or(SettingsError::MissingAccess { missing: "user_id" })?;
        let sign = sign
            .filter(|s| !s.trim().is_empty())
            .ok_or(SettingsError::MissingAccess { missing: "sign" })?;
        Ok(Self { user_id, sign })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("sign", &"<redacted>")
            .finish()
    }
}

/// Everything a save request sends besides the credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsUpdate {
    pub salary: Salary,
    pub experience: Experience,
    pub industry: Vec<NodeId>,
    pub search_areas: Vec<NodeId>,
}

/// Remote settings storage
pub trait SettingsApi: Sync {
    /// Load the user's current settings, already normalized
    fn fetch(&self, credentials: &Credentials) -> SettingsResult<UserSettings>;

    /// Persist new settings
    fn update(&self, credentials: &Credentials, update: &SettingsUpdate) -> SettingsResult<()>;
}
