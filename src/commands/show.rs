//! Show command handler

use anyhow::Result;

use aurora_settings::presentation::Cli;
use aurora_settings::ui::views::SettingsView;

use super::CommandContext;

pub fn cmd_show(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::new(cli)?;
    let (_api, session) = ctx.load_session(cli)?;

    print!(
        "{}",
        SettingsView::new(&session).render(ctx.caps.supports_color, ctx.icons)
    );
    Ok(())
}
