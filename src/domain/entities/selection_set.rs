//! SelectionSet - the canonical set of chosen node identifiers
//!
//! Both leaf and category ids may be present. A category id means "the whole
//! subtree", whether or not the child ids are also present; the state reducer
//! resolves that at display and save time.

use std::collections::HashSet;

use crate::domain::value_objects::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<NodeId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from already-normalized identifiers, dropping empty ones
    pub fn from_ids(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            ids: ids.into_iter().filter(|id| !id.is_empty()).collect(),
        }
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.ids.contains(id)
    }

    /// Returns true if the id was newly inserted
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.ids.insert(id)
    }

    /// Returns true if the id was present
    pub fn remove(&mut self, id: &NodeId) -> bool {
        self.ids.remove(id)
    }

    pub fn set(&mut self, id: &NodeId, selected: bool) {
        if selected {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.ids.iter()
    }

    /// Identifiers in sorted order, for stable output
    pub fn sorted(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<NodeId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = NodeId>>(iter: T) -> Self {
        Self::from_ids(iter)
    }
}
