//! Common test utilities for the scenario and contract tests.
//!
//! - Fixtures: small industry and area dictionaries
//! - Fakes: in-memory settings API and dictionary source

pub mod fakes;
pub mod fixtures;

pub use fakes::*;
pub use fixtures::*;
