//! aurora-settings - edit job-search filters from the terminal
//!
//! Usage: aurora-settings [--user-id ID] [--sign SIGN] <COMMAND>
//!
//! Commands:
//!   show      Print the current settings
//!   edit      Edit industries, areas, salary or experience
//!   collapse  Print the id list a save would send

mod commands;

use anyhow::Result;
use clap::Parser;

use aurora_settings::logging::{init_subscriber, Verbosity};
use aurora_settings::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    match &cli.command {
        Commands::Show => commands::show::cmd_show(&cli),
        Commands::Edit { target } => commands::edit::cmd_edit(&cli, *target),
        Commands::Collapse { tree, ids } => {
            commands::collapse::cmd_collapse(&cli, (*tree).into(), ids)
        }
    }
}
