//! Edit command handler

use anyhow::{bail, Result};
use dialoguer::{Input, Select};

use aurora_settings::application::{DictionaryStatus, SettingsSession};
use aurora_settings::domain::entities::TreeKind;
use aurora_settings::domain::value_objects::{Experience, Salary};
use aurora_settings::presentation::{Cli, EditTarget};
use aurora_settings::ui::widgets::tree_menu::{run_interactive, MenuExit, TreeMenu};
use aurora_settings::ui::PromptTheme;

use super::CommandContext;

pub fn cmd_edit(cli: &Cli, target: EditTarget) -> Result<()> {
    let ctx = CommandContext::new(cli)?;
    if !ctx.caps.is_interactive() {
        bail!("editing needs an interactive terminal; use `show` to print settings");
    }

    let (api, mut session) = ctx.load_session(cli)?;

    let confirmed = match target.tree() {
        Some(kind) => edit_tree(&ctx, &mut session, kind)?,
        None => {
            let theme = PromptTheme::new(ctx.icons.unicode());
            match target {
                EditTarget::Salary => edit_salary(&theme, &mut session)?,
                _ => edit_experience(&theme, &mut session)?,
            }
            true
        }
    };

    if !confirmed {
        println!("Cancelled, nothing saved");
        return Ok(());
    }

    ctx.save(&api, &mut session)?;
    Ok(())
}

/// Returns false when the user quit the tree without confirming
fn edit_tree(ctx: &CommandContext, session: &mut SettingsSession, kind: TreeKind) -> Result<bool> {
    let tree = session.tree(kind);
    if let DictionaryStatus::Unavailable(message) = tree.status() {
        bail!("could not load the {} dictionary: {}", kind, message);
    }

    let title = match kind {
        TreeKind::Industries => "Industries",
        TreeKind::Areas => "Search areas",
    };

    let mut menu = TreeMenu::new(tree, ctx.config.tree_options(kind), ctx.config.debounce());
    match run_interactive(&mut menu, title, ctx.icons)? {
        MenuExit::Quit => Ok(false),
        MenuExit::Confirm => {
            let selection = menu.into_selection();
            session.tree_mut(kind).replace_selection(selection);
            Ok(true)
        }
    }
}

fn edit_salary(theme: &PromptTheme, session: &mut SettingsSession) -> Result<()> {
    let current = session.draft().salary;
    let initial = if current.is_set() {
        current.value().to_string()
    } else {
        String::new()
    };

    let input: String = Input::with_theme(theme)
        .with_prompt("Minimum salary in rubles (blank for none)")
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            Salary::parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    session.set_salary_input(&input)?;
    Ok(())
}

fn edit_experience(theme: &PromptTheme, session: &mut SettingsSession) -> Result<()> {
    let current = session.draft().experience;
    let labels: Vec<&str> = Experience::ALL.iter().map(|e| e.label()).collect();
    let default = Experience::ALL
        .iter()
        .position(|e| *e == current)
        .unwrap_or(0);

    let choice = Select::with_theme(theme)
        .with_prompt("Required work experience")
        .items(&labels)
        .default(default)
        .interact()?;

    if let Some(experience) = Experience::ALL.get(choice) {
        session.set_experience(*experience);
    }
    Ok(())
}
