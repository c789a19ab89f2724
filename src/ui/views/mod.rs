pub mod settings;

pub use settings::{render_save_error, render_save_outcome, SettingsView};
