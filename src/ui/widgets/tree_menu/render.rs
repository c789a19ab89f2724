//! Terminal rendering functions for tree menu.
//!
//! Everything here returns plain strings so the output can be tested
//! without a terminal.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::services::{NodeRow, Row};
use crate::domain::value_objects::SelectionState;
use crate::ui::theme::Icons;

/// Render one visible row, cut to `width` columns (0 means unlimited)
pub fn render_row(row: &Row, is_active: bool, icons: Icons, width: usize) -> String {
    let cursor = if is_active { "> " } else { "  " };
    let line = match row {
        Row::Node(node) => format!("{}{}", cursor, render_node(node, icons)),
        Row::ShowMore { shown, total } => {
            format!("{}  + Show more ({} of {}, press m)", cursor, shown, total)
        }
        Row::Notice(text) => format!("{}  {}", cursor, text),
    };
    fit(&line, width)
}

fn render_node(node: &NodeRow, icons: Icons) -> String {
    let indent = "  ".repeat(node.depth);

    let expand_icon = if node.has_children() {
        format!("{} ", icons.expand(node.expanded))
    } else {
        " ".repeat(icons.expand(false).width() + 1)
    };

    let count_suffix = if node.has_children() {
        format!(" ({})", node.child_count)
    } else {
        String::new()
    };

    let crumb = match &node.breadcrumb {
        Some(path) => format!("  {} {}", icons.arrow(), path),
        None => String::new(),
    };

    format!(
        "{}{}{} {}{}{}",
        indent,
        expand_icon,
        icons.state(node.state),
        node.label,
        count_suffix,
        crumb
    )
}

/// Search input line
pub fn render_search_line(text: &str, typing: bool) -> String {
    if typing {
        format!("Search: {}_", text)
    } else {
        format!("Filter: {}    [/] edit    [Esc] clear", text)
    }
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, sending: usize, icons: Icons) -> String {
    format!(
        "Selected: {}/{}    Will send {} id(s)\n{} = selected    {} = partial    {} = not selected",
        selected,
        total,
        sending,
        icons.state(SelectionState::Selected),
        icons.state(SelectionState::Partial),
        icons.state(SelectionState::Unselected),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(searching: bool) -> String {
    if searching {
        String::from("Type to filter    [Enter] Apply    [Esc] Clear search")
    } else {
        String::from(
            "[Space] Toggle    [/] Search    [m] More    [n] None    [Enter] Save    [q] Quit\n\
             (Use ↑↓ PgUp PgDn to navigate, →← to expand/collapse)",
        )
    }
}

/// Cut a line to `width` display columns, marking the cut with `…`
pub fn fit(line: &str, width: usize) -> String {
    if width == 0 || line.width() <= width {
        return line.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
