//! Domain Layer
//!
//! The selection core - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - TreeIndex, SelectionSet, settings snapshot
//! - `value_objects/` - NodeId, SelectionState, Salary, Experience
//! - `services/` - State reducer, tree view, search filter, debouncer
//! - `ports/` - Interfaces for the settings API and dictionary sources
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network or file system
//! 2. **Selection is the source of truth** - display states are derived on demand
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
