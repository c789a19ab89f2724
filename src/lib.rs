//! aurora-settings - terminal settings editor for a job-search notification bot
//!
//! Loads the user's search filters from the settings API, lets them edit the
//! industry and area trees (with parent/child selection propagation), salary
//! and experience, and saves the minimal id lists back.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{SaveOutcome, SettingsSession, TreeSession};
pub use config::Config;
pub use domain::entities::{SelectionSet, TreeIndex, TreeKind};
pub use domain::services::collapse;
pub use domain::value_objects::NodeId;
pub use error::{SettingsError, SettingsResult};
