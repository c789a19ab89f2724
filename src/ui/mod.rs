//! Terminal UI
//!
//! Theme tokens, capability detection, the tree menu widget and the
//! settings summary view.

pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::{Icons, PromptTheme};
