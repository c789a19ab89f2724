//! Domain Entities
//!
//! Core data owned by the settings session.

mod dictionary;
mod selection_set;
mod settings;
mod tree_index;

pub use dictionary::{AreaNode, Category, Industry};
pub use selection_set::SelectionSet;
pub use settings::{SettingsDraft, SettingsSnapshot, UserSettings};
pub use tree_index::{Ancestors, NodeIdx, TreeIndex, TreeKind, TreeNode};
