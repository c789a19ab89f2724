//! Settings API adapter

mod http;
pub mod wire;

pub(crate) use http::{build_client, USER_AGENT};
pub use http::HttpSettingsApi;
pub use wire::{normalize_ids, normalize_settings};
