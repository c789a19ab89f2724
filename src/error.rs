//! Error types for aurora-settings
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Main error type for settings operations
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The access link did not carry a user id and signature
    #[error("access denied: the link is missing the {missing} parameter")]
    MissingAccess { missing: &'static str },

    /// HTTP transport failure (connection, timeout, TLS)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The API answered with a non-ok status
    #[error("server rejected the request: {message}")]
    Api { message: String },

    /// Response or dictionary body could not be decoded
    #[error("invalid JSON in {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Salary is not a whole number
    #[error("salary must be a whole number, got '{input}'")]
    SalaryNotANumber { input: String },

    /// Salary is below zero
    #[error("salary must be a positive number")]
    SalaryNegative,

    /// Salary is above the accepted ceiling
    #[error("salary cannot exceed {max}")]
    SalaryTooLarge { max: u64 },

    /// A dictionary could not be loaded
    #[error("could not load {dictionary} dictionary: {message}")]
    DictionaryUnavailable {
        dictionary: &'static str,
        message: String,
    },

    /// An identifier is not part of the loaded tree
    #[error("unknown node id '{id}'")]
    UnknownNode { id: String },

    /// A loader thread stopped before reporting its result
    #[error("loading stopped before the {what} arrived")]
    LoadIncomplete { what: &'static str },

    /// Child identifier does not belong to the given parent
    #[error("'{child}' is not a child of '{parent}'")]
    NotAChild { parent: String, child: String },
}
