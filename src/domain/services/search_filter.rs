//! Search filter - text matching over a [`TreeIndex`]
//!
//! Two strategies:
//! - [`match_hierarchy`] keeps the tree shape: a node is shown when its name
//!   matches or something below it matches.
//! - [`flat_search`] ignores the hierarchy and scans every node, for area
//!   trees too large to expand. Results are capped.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::entities::{NodeIdx, TreeIndex};

/// Default cap on flat search results
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Lower-cased, trimmed query. Empty means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query(String);

impl Query {
    pub fn new(text: &str) -> Self {
        Self(fold(text.trim()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match, no fuzzy matching
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || fold(name).contains(&self.0)
    }
}

/// Case folding used for matching and ordering. `ё` sorts and matches as `е`.
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}

/// Alphabetical comparison of display names, case-insensitive first
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Nodes kept by a hierarchical filter
#[derive(Debug, Clone, Default)]
pub struct HierarchyMatch {
    included: HashSet<NodeIdx>,
    expanded: HashSet<NodeIdx>,
}

impl HierarchyMatch {
    pub fn is_included(&self, idx: NodeIdx) -> bool {
        self.included.contains(&idx)
    }

    /// Container forced open because something inside it is shown
    pub fn is_force_expanded(&self, idx: NodeIdx) -> bool {
        self.expanded.contains(&idx)
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }
}

/// Filter keeping the hierarchy.
///
/// - Name match: the node is shown with all of its children.
/// - Only some descendants match: the node is shown with just the branches
///   leading to those matches, force-expanded.
pub fn match_hierarchy(index: &TreeIndex, query: &Query) -> HierarchyMatch {
    let n = index.len();
    let self_match: Vec<bool> = index
        .iter()
        .map(|idx| query.matches(&index.node(idx).name))
        .collect();

    let mut below = vec![false; n];
    for idx in index.iter().collect::<Vec<_>>().into_iter().rev() {
        let hit = index
            .children(idx)
            .iter()
            .any(|c| self_match[c.get()] || below[c.get()]);
        below[idx.get()] = hit;
    }

    let mut result = HierarchyMatch::default();
    let mut stack: Vec<(NodeIdx, bool)> = index
        .roots()
        .iter()
        .filter(|r| self_match[r.get()] || below[r.get()])
        .map(|r| (*r, false))
        .collect();

    while let Some((idx, inherited)) = stack.pop() {
        result.included.insert(idx);
        let show_all = inherited || self_match[idx.get()];

        let mut any_child = false;
        for child in index.children(idx) {
            if show_all || self_match[child.get()] || below[child.get()] {
                stack.push((*child, show_all));
                any_child = true;
            }
        }
        if any_child {
            result.expanded.insert(idx);
        }
    }

    result
}

/// Result of a flat scan
#[derive(Debug, Clone, Default)]
pub struct FlatMatches {
    pub hits: Vec<NodeIdx>,
    /// More nodes matched than the cap allowed
    pub truncated: bool,
}

/// Linear scan over every node, returning at most `limit` matches in
/// dictionary order.
pub fn flat_search(index: &TreeIndex, query: &Query, limit: usize) -> FlatMatches {
    if query.is_empty() {
        return FlatMatches::default();
    }

    let mut hits = Vec::new();
    let mut truncated = false;
    for idx in index.iter() {
        if query.matches(&index.node(idx).name) {
            if hits.len() == limit {
                truncated = true;
                break;
            }
            hits.push(idx);
        }
    }

    FlatMatches { hits, truncated }
}
