//! Presentation Layer
//!
//! - `cli` - clap argument definitions
//! - `factory` - builds the settings API client and dictionary sources from config

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands, EditTarget, TreeArg};
