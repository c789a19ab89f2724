//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `api`: HTTP client for the settings endpoints
//! - `dictionary`: static dictionary files, local or remote

pub mod api;
pub mod dictionary;

pub use api::HttpSettingsApi;
pub use dictionary::{parse_dictionary, DictionaryLocation, StaticDictionaries};
