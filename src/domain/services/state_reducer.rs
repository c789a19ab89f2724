//! State reducer - parent/child selection propagation and save-time collapse
//!
//! The [`SelectionSet`] is the single source of truth. Everything here either
//! derives a [`SelectionState`] from it or mutates it through an explicit
//! command (`toggle_parent`, `toggle_child`).
//!
//! Conventions:
//! - A node id in the set means its whole subtree is selected. When both a
//!   parent id and a strict subset of its children are present, the parent id
//!   wins.
//! - A node without children is a plain leaf: its own id is the only
//!   selection unit.

use crate::domain::entities::{NodeIdx, SelectionSet, TreeIndex};
use crate::domain::value_objects::{NodeId, SelectionState};
use crate::error::{SettingsError, SettingsResult};

/// State of a subtree ignoring any selected ancestor
fn subtree_state(index: &TreeIndex, selection: &SelectionSet, idx: NodeIdx) -> SelectionState {
    let node = index.node(idx);
    if selection.contains(&node.id) {
        return SelectionState::Selected;
    }
    if node.is_leaf() {
        return SelectionState::Unselected;
    }
    SelectionState::from_children(
        node.children
            .iter()
            .map(|child| subtree_state(index, selection, *child)),
    )
}

/// Display state of a single node.
///
/// For a category with N children of which k are selected: k = 0 is
/// `Unselected`, k = N is `Selected`, anything in between is `Partial`.
/// A selected ancestor forces `Selected`.
pub fn compute_parent_state(
    index: &TreeIndex,
    selection: &SelectionSet,
    idx: NodeIdx,
) -> SelectionState {
    let ancestor_selected = index
        .ancestors(idx)
        .any(|a| selection.contains(&index.node(a).id));
    if ancestor_selected {
        SelectionState::Selected
    } else {
        subtree_state(index, selection, idx)
    }
}

/// Display states for every node, computed in two linear passes
#[derive(Debug, Clone)]
pub struct StateMap {
    states: Vec<SelectionState>,
}

impl StateMap {
    pub fn compute(index: &TreeIndex, selection: &SelectionSet) -> Self {
        let mut states = vec![SelectionState::Unselected; index.len()];

        // Children follow their parent in pre-order, so a reverse walk sees
        // every child before its parent.
        for idx in index.iter().collect::<Vec<_>>().into_iter().rev() {
            let node = index.node(idx);
            let state = if selection.contains(&node.id) {
                SelectionState::Selected
            } else if node.is_leaf() {
                SelectionState::Unselected
            } else {
                SelectionState::from_children(node.children.iter().map(|c| states[c.get()]))
            };
            states[idx.get()] = state;
        }

        for idx in index.iter() {
            if let Some(parent) = index.node(idx).parent {
                if states[parent.get()] == SelectionState::Selected {
                    states[idx.get()] = SelectionState::Selected;
                }
            }
        }

        Self { states }
    }

    pub fn get(&self, idx: NodeIdx) -> SelectionState {
        self.states
            .get(idx.get())
            .copied()
            .unwrap_or(SelectionState::Unselected)
    }

    /// Count of selected leaves
    pub fn selected_leaves(&self, index: &TreeIndex) -> usize {
        index
            .iter()
            .filter(|idx| index.node(*idx).is_leaf() && self.get(*idx) == SelectionState::Selected)
            .count()
    }
}

/// Replace every selected ancestor id above `idx` with explicit child ids.
///
/// After this the ancestors hold no ids of their own, so `sync_ancestors`
/// can rebuild them from the children alone.
fn materialize_ancestors(index: &TreeIndex, selection: &mut SelectionSet, idx: NodeIdx) {
    let mut chain: Vec<NodeIdx> = index.ancestors(idx).collect();
    chain.reverse();

    for ancestor in chain {
        let node = index.node(ancestor);
        if selection.remove(&node.id) {
            for child in &node.children {
                selection.insert(index.node(*child).id.clone());
            }
        }
    }
}

/// Keep the "category id implies full subtree" convention: every ancestor
/// whose children are all selected carries its own id, others do not.
fn sync_ancestors(index: &TreeIndex, selection: &mut SelectionSet, idx: NodeIdx) {
    let ancestors: Vec<NodeIdx> = index.ancestors(idx).collect();
    for ancestor in ancestors {
        let node = index.node(ancestor);
        let full = node
            .children
            .iter()
            .all(|c| subtree_state(index, selection, *c) == SelectionState::Selected);
        selection.set(&node.id, full);
    }
}

/// Set a node and its entire subtree to `checked`, then resync ancestors.
///
/// Returns the node's new display state.
pub fn toggle(
    index: &TreeIndex,
    selection: &mut SelectionSet,
    idx: NodeIdx,
    checked: bool,
) -> SelectionState {
    materialize_ancestors(index, selection, idx);

    selection.set(&index.node(idx).id, checked);
    for descendant in index.descendants(idx) {
        selection.set(&index.node(descendant).id, checked);
    }

    sync_ancestors(index, selection, idx);
    compute_parent_state(index, selection, idx)
}

/// Parent checkbox clicked: every child follows the new value.
///
/// The result is always `Selected` or `Unselected`, never `Partial`.
pub fn toggle_parent(
    index: &TreeIndex,
    selection: &mut SelectionSet,
    parent: NodeIdx,
    checked: bool,
) -> SelectionState {
    toggle(index, selection, parent, checked)
}

/// Child checkbox clicked: update the child and return the parent's new state.
///
/// When the parent ends up fully selected its own id is added to the set;
/// otherwise it is removed.
pub fn toggle_child(
    index: &TreeIndex,
    selection: &mut SelectionSet,
    parent: NodeIdx,
    child: NodeIdx,
    checked: bool,
) -> SettingsResult<SelectionState> {
    if index.node(child).parent != Some(parent) {
        return Err(SettingsError::NotAChild {
            parent: index.node(parent).id.to_string(),
            child: index.node(child).id.to_string(),
        });
    }

    toggle(index, selection, child, checked);
    Ok(compute_parent_state(index, selection, parent))
}

/// Reduce the selection to the minimal id list the search API expects.
///
/// A fully covered node is emitted alone, never its children. Partially
/// covered nodes recurse. Ids that are not part of the tree (for example when
/// the dictionary failed to load) are passed through unchanged, sorted, after
/// the tree ids.
pub fn collapse(index: &TreeIndex, selection: &SelectionSet) -> Vec<NodeId> {
    fn emit(
        index: &TreeIndex,
        selection: &SelectionSet,
        idx: NodeIdx,
        out: &mut Vec<NodeId>,
    ) {
        match subtree_state(index, selection, idx) {
            SelectionState::Selected => out.push(index.node(idx).id.clone()),
            SelectionState::Partial => {
                for child in index.children(idx) {
                    emit(index, selection, *child, out);
                }
            }
            SelectionState::Unselected => {}
        }
    }

    let mut out = Vec::new();
    for root in index.roots() {
        emit(index, selection, *root, &mut out);
    }

    let mut unknown: Vec<NodeId> = selection
        .iter()
        .filter(|id| !index.contains(id))
        .cloned()
        .collect();
    unknown.sort();
    out.extend(unknown);
    out
}

/// Resolve an id to its node, for callers holding wire identifiers
pub fn resolve(index: &TreeIndex, id: &NodeId) -> SettingsResult<NodeIdx> {
    index
        .lookup(id)
        .ok_or_else(|| SettingsError::UnknownNode { id: id.to_string() })
}
