//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Session
//!
//! - `SettingsSession` - loads settings and dictionaries, holds both trees
//!   and the draft, saves behind an idempotence guard

pub mod session;

pub use session::{
    DictionaryStatus, LoadGate, LoadPhase, SaveOutcome, SettingsSession, TreeSession,
};
