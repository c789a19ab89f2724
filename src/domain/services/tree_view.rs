//! Tree view - the visible projection of a tree and its selection
//!
//! `TreeView` holds only presentation state (expanded nodes, query, page
//! limit, promotion order). Selection lives in the [`SelectionSet`]; every
//! call to [`TreeView::rows`] re-derives checkbox states from it, so the view
//! never becomes a second source of truth.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{NodeIdx, SelectionSet, TreeIndex, TreeKind};
use crate::domain::value_objects::SelectionState;

use super::search_filter::{
    compare_names, flat_search, match_hierarchy, HierarchyMatch, Query, DEFAULT_SEARCH_LIMIT,
};
use super::state_reducer::{self, StateMap};

/// Default number of root rows per page for paginated trees
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Presentation options for one tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeViewOptions {
    /// Paginate the root list, `None` shows every root
    pub page_size: Option<usize>,
    /// Search scans all nodes flat instead of filtering the hierarchy
    pub flat_search: bool,
    /// Cap on flat search results
    pub search_limit: usize,
    pub breadcrumb_separator: String,
}

impl TreeViewOptions {
    /// Two-level industry tree: everything on one page, hierarchical search
    pub fn industries() -> Self {
        Self {
            page_size: None,
            flat_search: false,
            search_limit: DEFAULT_SEARCH_LIMIT,
            breadcrumb_separator: " / ".to_string(),
        }
    }

    /// Large area tree: paginated roots, flat capped search
    pub fn areas() -> Self {
        Self {
            page_size: Some(DEFAULT_PAGE_SIZE),
            flat_search: true,
            search_limit: DEFAULT_SEARCH_LIMIT,
            breadcrumb_separator: " / ".to_string(),
        }
    }

    pub fn for_kind(kind: TreeKind) -> Self {
        match kind {
            TreeKind::Industries => Self::industries(),
            TreeKind::Areas => Self::areas(),
        }
    }
}

/// A visible tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub idx: NodeIdx,
    pub depth: usize,
    pub label: String,
    /// Ancestor path, set for flat search hits
    pub breadcrumb: Option<String>,
    pub state: SelectionState,
    pub expanded: bool,
    pub child_count: usize,
}

impl NodeRow {
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }
}

/// One line of the visible list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Node(NodeRow),
    /// More roots are available than the current page shows
    ShowMore { shown: usize, total: usize },
    /// Informational line (empty result, truncated search)
    Notice(String),
}

impl Row {
    pub fn node(&self) -> Option<&NodeRow> {
        match self {
            Row::Node(node) => Some(node),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeView {
    options: TreeViewOptions,
    expanded: HashSet<NodeIdx>,
    /// Nodes the user closed while a hierarchical search was active
    search_collapsed: HashSet<NodeIdx>,
    query: Query,
    limit: usize,
    /// Most recently touched roots first
    promoted: Vec<NodeIdx>,
    /// Child order, built the first time a node is expanded
    children_cache: HashMap<NodeIdx, Vec<NodeIdx>>,
    scroll_reset: bool,
}

impl TreeView {
    pub fn new(options: TreeViewOptions) -> Self {
        let limit = options.page_size.unwrap_or(usize::MAX);
        Self {
            options,
            expanded: HashSet::new(),
            search_collapsed: HashSet::new(),
            query: Query::default(),
            limit,
            promoted: Vec::new(),
            children_cache: HashMap::new(),
            scroll_reset: false,
        }
    }

    pub fn options(&self) -> &TreeViewOptions {
        &self.options
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Apply a new filter text. Returns true if the effective query changed.
    pub fn set_query(&mut self, text: &str) -> bool {
        let query = Query::new(text);
        if query == self.query {
            return false;
        }
        self.query = query;
        self.search_collapsed.clear();
        true
    }

    pub fn is_expanded(&self, idx: NodeIdx) -> bool {
        self.expanded.contains(&idx)
    }

    /// Number of nodes whose children have been built
    pub fn materialized(&self) -> usize {
        self.children_cache.len()
    }

    /// Expand or collapse a node. Leaves and flat search hits ignore this.
    pub fn set_expanded(&mut self, index: &TreeIndex, idx: NodeIdx, expanded: bool) {
        if index.node(idx).is_leaf() {
            return;
        }

        if !self.query.is_empty() {
            if self.options.flat_search {
                return;
            }
            if expanded {
                self.search_collapsed.remove(&idx);
            } else {
                self.search_collapsed.insert(idx);
            }
            return;
        }

        if expanded {
            self.materialize(index, idx);
            self.expanded.insert(idx);
        } else {
            self.expanded.remove(&idx);
        }
    }

    pub fn toggle_expanded(&mut self, index: &TreeIndex, idx: NodeIdx) {
        let open = if self.query.is_empty() {
            self.expanded.contains(&idx)
        } else {
            !self.search_collapsed.contains(&idx)
        };
        self.set_expanded(index, idx, !open);
    }

    /// Extend the root page by one page size
    pub fn show_more(&mut self) -> bool {
        match self.options.page_size {
            Some(page) => {
                self.limit = self.limit.saturating_add(page);
                true
            }
            None => false,
        }
    }

    /// Flip a node's checkbox the way a click would.
    ///
    /// Selected goes to unselected; unselected and partial go to selected.
    /// When the node's root ends up selected or partial it is promoted to the
    /// top of the list and a scroll reset is requested.
    pub fn toggle(
        &mut self,
        index: &TreeIndex,
        selection: &mut SelectionSet,
        idx: NodeIdx,
    ) -> SelectionState {
        let current = state_reducer::compute_parent_state(index, selection, idx);
        let checked = current != SelectionState::Selected;
        let state = state_reducer::toggle(index, selection, idx, checked);

        let root = index.ancestors(idx).last().unwrap_or(idx);
        self.promoted.retain(|p| *p != root);
        if state_reducer::compute_parent_state(index, selection, root).is_touched() {
            self.promoted.insert(0, root);
            self.scroll_reset = true;
        }
        state
    }

    /// Returns true once after a promotion asked for the list to scroll up
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    fn materialize(&mut self, index: &TreeIndex, idx: NodeIdx) {
        if !self.children_cache.contains_key(&idx) {
            let order = sorted_children(index, idx);
            self.children_cache.insert(idx, order);
        }
    }

    fn children_of(&self, index: &TreeIndex, idx: NodeIdx) -> Vec<NodeIdx> {
        match self.children_cache.get(&idx) {
            Some(order) => order.clone(),
            None => sorted_children(index, idx),
        }
    }

    /// Roots ordered: promoted (most recent first), then other selected or
    /// partial roots, then the rest; alphabetical within each group.
    fn ordered_roots(&self, index: &TreeIndex, states: &StateMap) -> Vec<NodeIdx> {
        let promoted: Vec<NodeIdx> = self
            .promoted
            .iter()
            .copied()
            .filter(|r| states.get(*r).is_touched())
            .collect();

        let mut rest: Vec<NodeIdx> = index
            .roots()
            .iter()
            .copied()
            .filter(|r| !promoted.contains(r))
            .collect();
        rest.sort_by(|a, b| {
            let a_touched = states.get(*a).is_touched();
            let b_touched = states.get(*b).is_touched();
            b_touched
                .cmp(&a_touched)
                .then_with(|| compare_names(&index.node(*a).name, &index.node(*b).name))
        });

        promoted.into_iter().chain(rest).collect()
    }

    fn node_row(
        &self,
        index: &TreeIndex,
        states: &StateMap,
        idx: NodeIdx,
        depth: usize,
        expanded: bool,
    ) -> NodeRow {
        let node = index.node(idx);
        NodeRow {
            idx,
            depth,
            label: node.name.clone(),
            breadcrumb: None,
            state: states.get(idx),
            expanded,
            child_count: node.children.len(),
        }
    }

    /// Build the visible rows for the current query and expansion state
    pub fn rows(&self, index: &TreeIndex, selection: &SelectionSet) -> Vec<Row> {
        let states = StateMap::compute(index, selection);

        if self.query.is_empty() {
            return self.unfiltered_rows(index, &states);
        }
        if self.options.flat_search {
            return self.flat_rows(index, &states);
        }

        let matched = match_hierarchy(index, &self.query);
        if matched.is_empty() {
            return vec![Row::Notice(format!(
                "Nothing matches \"{}\"",
                self.query.as_str()
            ))];
        }

        let mut rows = Vec::new();
        for root in self.ordered_roots(index, &states) {
            if matched.is_included(root) {
                self.push_filtered(index, &states, &matched, root, 0, &mut rows);
            }
        }
        rows
    }

    fn unfiltered_rows(&self, index: &TreeIndex, states: &StateMap) -> Vec<Row> {
        let roots = self.ordered_roots(index, states);
        let total = roots.len();
        let shown = total.min(self.limit);

        let mut rows = Vec::new();
        for root in roots.into_iter().take(shown) {
            self.push_expanded(index, states, root, 0, &mut rows);
        }
        if shown < total {
            rows.push(Row::ShowMore { shown, total });
        }
        rows
    }

    fn push_expanded(
        &self,
        index: &TreeIndex,
        states: &StateMap,
        idx: NodeIdx,
        depth: usize,
        rows: &mut Vec<Row>,
    ) {
        let expanded = self.expanded.contains(&idx) && !index.node(idx).is_leaf();
        rows.push(Row::Node(self.node_row(index, states, idx, depth, expanded)));
        if expanded {
            for child in self.children_of(index, idx) {
                self.push_expanded(index, states, child, depth + 1, rows);
            }
        }
    }

    fn push_filtered(
        &self,
        index: &TreeIndex,
        states: &StateMap,
        matched: &HierarchyMatch,
        idx: NodeIdx,
        depth: usize,
        rows: &mut Vec<Row>,
    ) {
        let expanded = matched.is_force_expanded(idx) && !self.search_collapsed.contains(&idx);
        rows.push(Row::Node(self.node_row(index, states, idx, depth, expanded)));
        if expanded {
            for child in self.children_of(index, idx) {
                if matched.is_included(child) {
                    self.push_filtered(index, states, matched, child, depth + 1, rows);
                }
            }
        }
    }

    fn flat_rows(&self, index: &TreeIndex, states: &StateMap) -> Vec<Row> {
        let matches = flat_search(index, &self.query, self.options.search_limit);
        if matches.hits.is_empty() {
            return vec![Row::Notice(format!(
                "Nothing matches \"{}\"",
                self.query.as_str()
            ))];
        }

        let mut rows: Vec<Row> = matches
            .hits
            .iter()
            .map(|idx| {
                let mut row = self.node_row(index, states, *idx, 0, false);
                let crumb = index.breadcrumb(*idx, &self.options.breadcrumb_separator);
                row.breadcrumb = (!crumb.is_empty()).then_some(crumb);
                Row::Node(row)
            })
            .collect();

        if matches.truncated {
            rows.push(Row::Notice(format!(
                "Showing the first {} matches, refine the search to see more",
                self.options.search_limit
            )));
        }
        rows
    }
}

fn sorted_children(index: &TreeIndex, idx: NodeIdx) -> Vec<NodeIdx> {
    let mut children = index.children(idx).to_vec();
    children.sort_by(|a, b| compare_names(&index.node(*a).name, &index.node(*b).name));
    children
}
