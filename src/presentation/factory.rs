//! Wiring of infrastructure from configuration and CLI flags

use std::path::Path;

use crate::config::Config;
use crate::domain::ports::Credentials;
use crate::error::SettingsResult;
use crate::infrastructure::{DictionaryLocation, HttpSettingsApi, StaticDictionaries};

use super::cli::Cli;

/// Config from `--config` if given, otherwise the first config file found
/// from the current directory. Environment overrides apply in both cases.
pub fn load_config(explicit: Option<&Path>) -> SettingsResult<Config> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load_or_default(cwd.as_deref()))
        }
    }
}

pub fn create_settings_api(config: &Config) -> SettingsResult<HttpSettingsApi> {
    HttpSettingsApi::new(config.api.base_url.clone(), config.timeout())
}

pub fn create_dictionaries(config: &Config) -> SettingsResult<StaticDictionaries> {
    StaticDictionaries::new(
        DictionaryLocation::parse(&config.dictionaries.industries),
        DictionaryLocation::parse(&config.dictionaries.areas),
        config.timeout(),
    )
}

/// CLI flags win over environment and config
pub fn resolve_credentials(cli: &Cli, config: &Config) -> SettingsResult<Credentials> {
    Credentials::new(
        cli.user_id.or(config.access.user_id),
        cli.sign.clone().or_else(|| config.access.sign.clone()),
    )
}
