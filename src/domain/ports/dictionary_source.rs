//! DictionarySource port - where the static industry and area trees come from

use crate::domain::entities::{AreaNode, Category, TreeIndex, TreeKind};
use crate::error::SettingsResult;

/// Provider of the two static dictionaries
pub trait DictionarySource: Sync {
    fn industries(&self) -> SettingsResult<Vec<Category>>;

    fn areas(&self) -> SettingsResult<Vec<AreaNode>>;

    /// Load one dictionary and index it
    fn load_index(&self, kind: TreeKind) -> SettingsResult<TreeIndex> {
        match kind {
            TreeKind::Industries => Ok(TreeIndex::from_categories(&self.industries()?)),
            TreeKind::Areas => Ok(TreeIndex::from_areas(&self.areas()?)),
        }
    }
}
