//! Command handlers for the binary

pub mod collapse;
pub mod edit;
pub mod show;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use aurora_settings::application::{SaveOutcome, SettingsSession};
use aurora_settings::config::Config;
use aurora_settings::infrastructure::HttpSettingsApi;
use aurora_settings::presentation::factory;
use aurora_settings::presentation::Cli;
use aurora_settings::ui::views::{render_save_error, render_save_outcome};
use aurora_settings::ui::{detect_capabilities, Icons, PromptTheme, TerminalCapabilities};

/// Config and terminal facts shared by every command
pub struct CommandContext {
    pub config: Config,
    pub caps: TerminalCapabilities,
    pub icons: Icons,
}

impl CommandContext {
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = factory::load_config(cli.config.as_deref()).context("failed to load config")?;
        let caps = detect_capabilities();
        let icons = Icons::new(caps.use_unicode(config.output.unicode));
        Ok(Self {
            config,
            caps,
            icons,
        })
    }

    /// Fetch the user's settings and both dictionaries
    pub fn load_session(&self, cli: &Cli) -> Result<(HttpSettingsApi, SettingsSession)> {
        let credentials = factory::resolve_credentials(cli, &self.config)?;
        let api = factory::create_settings_api(&self.config)?;
        let dictionaries = factory::create_dictionaries(&self.config)?;

        let session = SettingsSession::load(&api, &dictionaries, credentials)
            .context("failed to load settings")?;
        Ok((api, session))
    }

    /// Save and print the outcome.
    ///
    /// A failed save is reported inline and the user may retry with the same
    /// edits; the error is returned only once they decline.
    pub fn save(&self, api: &HttpSettingsApi, session: &mut SettingsSession) -> Result<SaveOutcome> {
        let theme = PromptTheme::new(self.icons.unicode());
        let outcome = session
            .save_with_retry(api, |err| {
                eprintln!(
                    "{}",
                    render_save_error(err, self.caps.supports_color, self.icons)
                );
                Confirm::with_theme(&theme)
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()
                    .unwrap_or(false)
            })
            .context("failed to save settings")?;
        println!(
            "{}",
            render_save_outcome(&outcome, self.caps.supports_color, self.icons)
        );
        Ok(outcome)
    }
}
