//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod dictionary_source;
pub mod settings_api;

pub use dictionary_source::DictionarySource;
pub use settings_api::{Credentials, SettingsApi, SettingsUpdate};
