//! TreeMenu state management and action handling.
//!
//! The menu edits a working copy of one tree's selection. Rows come from
//! [`TreeView::rows`] and are rebuilt after every action that can change
//! them; the menu itself only tracks the cursor, the scroll offset and the
//! search input.

use std::time::{Duration, Instant};

use crate::application::{DictionaryStatus, TreeSession};
use crate::domain::entities::{NodeIdx, SelectionSet, TreeIndex};
use crate::domain::services::{collapse, Debouncer, Row, StateMap, TreeView, TreeViewOptions};
use crate::ui::theme::Icons;

use super::render::{render_help_bar, render_row, render_search_line, render_status_bar};

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    Up,
    Down,
    PageUp,
    PageDown,
    /// Flip the checkbox under the cursor
    Toggle,
    Expand,
    Collapse,
    SelectNone,
    /// Extend a paginated root list
    ShowMore,
    /// Start typing a search query
    StartSearch,
    SearchChar(char),
    SearchBackspace,
    /// Stop typing and apply the query right away
    ApplySearch,
    /// Drop the query, or quit when there is none
    Back,
    Confirm,
    Quit,
}

/// How the menu was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Confirm,
    Quit,
}

/// Interactive tree menu for one dictionary
pub struct TreeMenu<'a> {
    index: &'a TreeIndex,
    unavailable: Option<String>,
    selection: SelectionSet,
    view: TreeView,
    rows: Vec<Row>,
    cursor: usize,
    scroll: usize,
    viewport: usize,
    searching: bool,
    search_text: String,
    debouncer: Debouncer<String>,
    total_leaves: usize,
}

impl<'a> TreeMenu<'a> {
    pub fn new(tree: &'a TreeSession, options: TreeViewOptions, debounce: Duration) -> Self {
        let index = tree.index();
        let unavailable = match tree.status() {
            DictionaryStatus::Loaded => None,
            DictionaryStatus::Unavailable(message) => Some(message.clone()),
        };
        let total_leaves = index.iter().filter(|idx| index.node(*idx).is_leaf()).count();

        let mut menu = Self {
            index,
            unavailable,
            selection: tree.selection().clone(),
            view: TreeView::new(options),
            rows: Vec::new(),
            cursor: 0,
            scroll: 0,
            viewport: 20,
            searching: false,
            search_text: String::new(),
            debouncer: Debouncer::new(debounce),
            total_leaves,
        };
        menu.refresh(None);
        menu
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn into_selection(self) -> SelectionSet {
        self.selection
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Text typed so far, possibly not yet applied
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Number of rows the terminal can show
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.ensure_visible();
    }

    /// Time until a pending search fires
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_left(now)
    }

    /// Apply a debounced query whose delay has passed. Returns true if the
    /// rows changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => self.apply_query(&text),
            None => false,
        }
    }

    /// Handle a tree action
    pub fn handle_action(&mut self, action: TreeAction, now: Instant) -> Option<MenuExit> {
        match action {
            TreeAction::Up => self.move_cursor(-1),
            TreeAction::Down => self.move_cursor(1),
            TreeAction::PageUp => self.move_cursor(-(self.viewport as isize)),
            TreeAction::PageDown => self.move_cursor(self.viewport as isize),
            TreeAction::Toggle => self.toggle_current(),
            TreeAction::Expand => self.expand_current(),
            TreeAction::Collapse => self.collapse_current(),
            TreeAction::SelectNone => {
                self.selection.clear();
                self.refresh(None);
            }
            TreeAction::ShowMore => {
                if self.view.show_more() {
                    self.refresh(None);
                }
            }
            TreeAction::StartSearch => self.searching = true,
            TreeAction::SearchChar(c) => {
                self.search_text.push(c);
                self.debouncer.schedule(self.search_text.clone(), now);
            }
            TreeAction::SearchBackspace => {
                self.search_text.pop();
                self.debouncer.schedule(self.search_text.clone(), now);
            }
            TreeAction::ApplySearch => {
                self.searching = false;
                self.debouncer.cancel();
                let text = self.search_text.clone();
                self.apply_query(&text);
            }
            TreeAction::Back => {
                if self.searching || !self.view.query().is_empty() || !self.search_text.is_empty() {
                    self.clear_search();
                } else {
                    return Some(MenuExit::Quit);
                }
            }
            TreeAction::Confirm => return Some(MenuExit::Confirm),
            TreeAction::Quit => return Some(MenuExit::Quit),
        }
        None
    }

    fn clear_search(&mut self) {
        self.searching = false;
        self.search_text.clear();
        self.debouncer.cancel();
        self.apply_query("");
    }

    fn apply_query(&mut self, text: &str) -> bool {
        if !self.view.set_query(text) {
            return false;
        }
        self.cursor = 0;
        self.scroll = 0;
        self.refresh(None);
        true
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.ensure_visible();
    }

    fn current(&self) -> Option<&Row> {
        self.rows.get(self.cursor)
    }

    fn current_node(&self) -> Option<NodeIdx> {
        self.current().and_then(Row::node).map(|n| n.idx)
    }

    fn toggle_current(&mut self) {
        match self.current() {
            Some(Row::ShowMore { .. }) => {
                self.view.show_more();
                self.refresh(None);
            }
            Some(Row::Node(node)) => {
                let idx = node.idx;
                let state = self.view.toggle(self.index, &mut self.selection, idx);
                tracing::debug!(node = %self.index.node(idx).id, ?state, "toggled");
                self.refresh(Some(idx));
            }
            _ => {}
        }
    }

    fn expand_current(&mut self) {
        match self.current() {
            Some(Row::ShowMore { .. }) => {
                self.view.show_more();
                self.refresh(None);
            }
            Some(Row::Node(node)) if node.has_children() && !node.expanded => {
                let idx = node.idx;
                self.view.set_expanded(self.index, idx, true);
                self.refresh(None);
            }
            _ => {}
        }
    }

    /// Close an open node, or jump to the parent row
    fn collapse_current(&mut self) {
        let Some(Row::Node(node)) = self.current() else {
            return;
        };
        let idx = node.idx;
        if node.expanded {
            self.view.set_expanded(self.index, idx, false);
            self.refresh(None);
            return;
        }

        if let Some(parent) = self.index.node(idx).parent {
            if let Some(pos) = self.position_of(parent) {
                self.cursor = pos;
                self.ensure_visible();
            }
        }
    }

    fn position_of(&self, idx: NodeIdx) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.node().is_some_and(|n| n.idx == idx))
    }

    /// Rebuild rows. When a toggle promoted a root, scroll back to the top
    /// and keep the cursor on the toggled node.
    fn refresh(&mut self, focus: Option<NodeIdx>) {
        let keep = self.current_node();
        self.rows = self.view.rows(self.index, &self.selection);

        if self.view.take_scroll_reset() {
            self.scroll = 0;
            self.cursor = focus.and_then(|idx| self.position_of(idx)).unwrap_or(0);
        } else if let Some(pos) = focus.or(keep).and_then(|idx| self.position_of(idx)) {
            self.cursor = pos;
        }

        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.viewport {
            self.scroll = self.cursor + 1 - self.viewport;
        }
    }

    /// Selected leaves and total leaves
    pub fn coverage(&self) -> (usize, usize) {
        let states = StateMap::compute(self.index, &self.selection);
        (states.selected_leaves(self.index), self.total_leaves)
    }

    /// Render the visible window of rows
    pub fn render(&self, icons: Icons, width: usize) -> String {
        if let Some(message) = &self.unavailable {
            return format!(
                "  {} Could not load the {} dictionary: {}\n",
                icons.error(),
                self.index.kind(),
                message
            );
        }
        if self.rows.is_empty() {
            return "  (empty)\n".to_string();
        }

        let mut out = String::new();
        for (i, row) in self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(self.viewport)
        {
            out.push_str(&render_row(row, i == self.cursor, icons, width));
            out.push('\n');
        }
        out
    }

    /// Search prompt line, empty when no search is active
    pub fn render_search_line(&self) -> Option<String> {
        if !self.searching && self.search_text.is_empty() {
            return None;
        }
        Some(render_search_line(&self.search_text, self.searching))
    }

    pub fn render_status_bar(&self, icons: Icons) -> String {
        let (selected, total) = self.coverage();
        let sending = collapse(self.index, &self.selection).len();
        render_status_bar(selected, total, sending, icons)
    }

    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.searching)
    }
}
