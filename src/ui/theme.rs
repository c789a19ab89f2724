use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

use crate::domain::value_objects::SelectionState;

/// Design tokens for the settings UI.
///
/// All colors and icons used by the views and the tree menu come from here.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
}

/// Icon set picked once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    unicode: bool,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn unicode(&self) -> bool {
        self.unicode
    }

    fn pick(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn state(&self, state: SelectionState) -> &'static str {
        match state {
            SelectionState::Selected => self.pick(icons::SELECTED, icons_ascii::SELECTED),
            SelectionState::Unselected => self.pick(icons::UNSELECTED, icons_ascii::UNSELECTED),
            SelectionState::Partial => self.pick(icons::PARTIAL, icons_ascii::PARTIAL),
        }
    }

    pub fn expand(&self, expanded: bool) -> &'static str {
        if expanded {
            self.pick(icons::EXPAND, icons_ascii::EXPAND)
        } else {
            self.pick(icons::COLLAPSE, icons_ascii::COLLAPSE)
        }
    }

    pub fn success(&self) -> &'static str {
        self.pick(icons::SUCCESS, icons_ascii::SUCCESS)
    }

    pub fn error(&self) -> &'static str {
        self.pick(icons::ERROR, icons_ascii::ERROR)
    }

    pub fn warning(&self) -> &'static str {
        self.pick(icons::WARNING, icons_ascii::WARNING)
    }

    pub fn arrow(&self) -> &'static str {
        self.pick(icons::ARROW, icons_ascii::ARROW)
    }
}

// ----------------------------------------------------------------------------
// PromptTheme - dialoguer theme using the same icons
// ----------------------------------------------------------------------------

/// dialoguer theme for the salary and experience prompts.
///
/// Wraps `ColorfulTheme` and only changes how select items are drawn.
pub struct PromptTheme {
    icons: Icons,
    inner: dialoguer::theme::ColorfulTheme,
}

impl PromptTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            icons: Icons::new(unicode),
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Theme for PromptTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "> {} {}", self.icons.state(SelectionState::Selected), text)
        } else {
            write!(f, "  {} {}", self.icons.state(SelectionState::Unselected), text)
        }
    }
}
