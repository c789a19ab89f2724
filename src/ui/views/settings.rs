use crossterm::style::{Color, Stylize};

use crate::application::{DictionaryStatus, SaveOutcome, SettingsSession, TreeSession};
use crate::domain::entities::TreeKind;
use crate::error::SettingsError;
use crate::ui::theme::{colors, Icons};

/// Lines of selected ids listed per tree before the rest is summarized
const MAX_LISTED: usize = 10;

fn paint(text: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

/// Summary printed by `show`
pub struct SettingsView<'a> {
    session: &'a SettingsSession,
}

impl<'a> SettingsView<'a> {
    pub fn new(session: &'a SettingsSession) -> Self {
        Self { session }
    }

    pub fn render(&self, supports_color: bool, icons: Icons) -> String {
        let mut out = String::new();
        let draft = self.session.draft();

        out.push_str(&format!(
            "Search settings for user {}\n\n",
            self.session.credentials().user_id
        ));
        out.push_str(&format!("  {:<12} {}\n", "Salary", draft.salary));
        out.push_str(&format!("  {:<12} {}\n", "Experience", draft.experience));

        for kind in [TreeKind::Industries, TreeKind::Areas] {
            out.push_str(&self.render_tree(self.session.tree(kind), supports_color, icons));
        }

        if self.session.has_changes() {
            out.push('\n');
            out.push_str(&paint(
                &format!("{} Unsaved changes", icons.warning()),
                colors::WARNING,
                supports_color,
            ));
            out.push('\n');
        }
        out
    }

    fn render_tree(&self, tree: &TreeSession, supports_color: bool, icons: Icons) -> String {
        let mut out = String::new();
        let title = match tree.kind() {
            TreeKind::Industries => "Industries",
            TreeKind::Areas => "Areas",
        };
        let collapsed = tree.collapsed();

        match tree.status() {
            DictionaryStatus::Unavailable(message) => {
                let line = format!(
                    "{} Could not load the {} dictionary: {}",
                    icons.warning(),
                    tree.kind(),
                    message
                );
                out.push_str(&format!(
                    "  {:<12} {}\n",
                    title,
                    paint(&line, colors::WARNING, supports_color)
                ));
            }
            DictionaryStatus::Loaded => {
                let (selected, total) = tree.coverage();
                let summary = if collapsed.is_empty() {
                    paint("nothing selected", colors::DIM, supports_color)
                } else {
                    format!("{} of {} selected", selected, total)
                };
                out.push_str(&format!("  {:<12} {}\n", title, summary));
            }
        }

        let index = tree.index();
        for id in collapsed.iter().take(MAX_LISTED) {
            let name = match index.lookup(id) {
                Some(idx) => index.node(idx).name.as_str(),
                None => "(not in dictionary)",
            };
            out.push_str(&format!(
                "  {:<12} {} {}\n",
                "",
                paint(id.as_str(), colors::INFO, supports_color),
                name
            ));
        }
        if collapsed.len() > MAX_LISTED {
            out.push_str(&format!(
                "  {:<12} {}\n",
                "",
                paint(
                    &format!("... and {} more", collapsed.len() - MAX_LISTED),
                    colors::DIM,
                    supports_color
                )
            ));
        }
        out
    }
}

/// One-line result of a save
pub fn render_save_outcome(outcome: &SaveOutcome, supports_color: bool, icons: Icons) -> String {
    match outcome {
        SaveOutcome::Unchanged => paint(
            &format!("{} Nothing changed, settings not sent", icons.success()),
            colors::DIM,
            supports_color,
        ),
        SaveOutcome::Saved(update) => paint(
            &format!(
                "{} Settings saved ({} industry id(s), {} area id(s))",
                icons.success(),
                update.industry.len(),
                update.search_areas.len()
            ),
            colors::SUCCESS,
            supports_color,
        ),
    }
}

/// Inline message for a save that did not go through
pub fn render_save_error(err: &SettingsError, supports_color: bool, icons: Icons) -> String {
    paint(
        &format!("{} Could not save: {}", icons.error(), err),
        colors::ERROR,
        supports_color,
    )
}
