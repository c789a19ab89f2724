//! Configuration module for aurora-settings
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AURORA_*)
//! 3. Project config (./aurora.toml)
//! 4. User config (<config_dir>/aurora-settings/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG};
pub use types::{
    AccessConfig, ApiConfig, Config, DictionaryConfig, OutputConfig, TreeConfig, UnicodeMode,
};
