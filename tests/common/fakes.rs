//! In-memory implementations of the settings API and dictionary ports.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use aurora_settings::domain::entities::{AreaNode, Category, UserSettings};
use aurora_settings::domain::ports::{Credentials, DictionarySource, SettingsApi, SettingsUpdate};
use aurora_settings::error::{SettingsError, SettingsResult};

pub fn credentials() -> Credentials {
    Credentials::new(Some(42), Some("signed".to_string())).unwrap()
}

pub struct FakeApi {
    settings: UserSettings,
    fetch_error: Option<String>,
    fail_updates: AtomicBool,
    update_calls: AtomicUsize,
    saved: Mutex<Vec<SettingsUpdate>>,
}

impl FakeApi {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings,
            fetch_error: None,
            fail_updates: AtomicBool::new(false),
            update_calls: AtomicUsize::new(0),
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting_fetch(message: &str) -> Self {
        let mut api = Self::new(UserSettings::default());
        api.fetch_error = Some(message.to_string());
        api
    }

    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Update requests that reached the API, failed ones included
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn saved(&self) -> Vec<SettingsUpdate> {
        self.saved.lock().unwrap().clone()
    }
}

impl SettingsApi for FakeApi {
    fn fetch(&self, _credentials: &Credentials) -> SettingsResult<UserSettings> {
        match &self.fetch_error {
            Some(message) => Err(SettingsError::Api {
                message: message.clone(),
            }),
            None => Ok(self.settings.clone()),
        }
    }

    fn update(&self, _credentials: &Credentials, update: &SettingsUpdate) -> SettingsResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(SettingsError::Transport {
                url: "http://fake/api/settings/update".to_string(),
                message: "connection reset".to_string(),
            });
        }
        self.saved.lock().unwrap().push(update.clone());
        Ok(())
    }
}

pub struct FakeDictionaries {
    pub industries: Result<Vec<Category>, String>,
    pub areas: Result<Vec<AreaNode>, String>,
}

impl FakeDictionaries {
    pub fn new(industries: Vec<Category>, areas: Vec<AreaNode>) -> Self {
        Self {
            industries: Ok(industries),
            areas: Ok(areas),
        }
    }
}

impl DictionarySource for FakeDictionaries {
    fn industries(&self) -> SettingsResult<Vec<Category>> {
        self.industries
            .clone()
            .map_err(|message| SettingsError::DictionaryUnavailable {
                dictionary: "industries",
                message,
            })
    }

    fn areas(&self) -> SettingsResult<Vec<AreaNode>> {
        self.areas
            .clone()
            .map_err(|message| SettingsError::DictionaryUnavailable {
                dictionary: "areas",
                message,
            })
    }
}
