//! Domain Services
//!
//! Stateless operations over the tree and selection, plus the view state
//! that projects them into rows.

pub mod debouncer;
pub mod search_filter;
pub mod state_reducer;
pub mod tree_view;

pub use debouncer::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use search_filter::{
    compare_names, flat_search, match_hierarchy, FlatMatches, HierarchyMatch, Query,
    DEFAULT_SEARCH_LIMIT,
};
pub use state_reducer::{
    collapse, compute_parent_state, resolve, toggle, toggle_child, toggle_parent, StateMap,
};
pub use tree_view::{NodeRow, Row, TreeView, TreeViewOptions, DEFAULT_PAGE_SIZE};
