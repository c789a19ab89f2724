//! Tracing subscriber setup for the CLI
//!
//! Logs go to stderr so they never mix with command output or the
//! interactive tree.
//!
//! # Priority (highest to lowest)
//!
//! 1. `AURORA_LOG` env var (directives, e.g. `aurora_settings=debug`)
//! 2. `RUST_LOG`
//! 3. CLI flags (`-v` info, `-vv` debug, `-vvv` trace, `-q` error)
//! 4. Default level: `warn`

use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose(u8),
}

impl Verbosity {
    /// `-v` wins over `-q` when both are given.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if verbose > 0 {
            Self::Verbose(verbose)
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose(1) => Level::INFO,
            Self::Verbose(2) => Level::DEBUG,
            Self::Verbose(_) => Level::TRACE,
        }
    }
}

/// Install the global subscriber. Call once, before loading config.
///
/// A second call is a no-op.
pub fn init_subscriber(verbosity: Verbosity) {
    let filter = build_env_filter(verbosity, |key| std::env::var(key).ok());
    let use_ansi = std::io::stderr().is_terminal();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(matches!(verbosity, Verbosity::Verbose(_)))
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_env_filter<F>(verbosity: Verbosity, get_env: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    for key in ["AURORA_LOG", "RUST_LOG"] {
        if let Some(directives) = get_env(key) {
            match EnvFilter::try_new(&directives) {
                Ok(filter) => return filter,
                Err(err) => eprintln!("warning: ignoring invalid {key}: {err}"),
            }
        }
    }

    EnvFilter::new(verbosity.default_level().as_str().to_lowercase())
}
