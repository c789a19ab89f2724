//! CLI Argument Parsing
//!
//! Global flags (access parameters, config path, verbosity) are accepted
//! before or after the subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::entities::TreeKind;

/// What `edit` opens
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Industries,
    Areas,
    Salary,
    Experience,
}

impl EditTarget {
    /// The tree behind this target, if it is one
    pub fn tree(self) -> Option<TreeKind> {
        match self {
            EditTarget::Industries => Some(TreeKind::Industries),
            EditTarget::Areas => Some(TreeKind::Areas),
            EditTarget::Salary | EditTarget::Experience => None,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeArg {
    Industries,
    Areas,
}

impl From<TreeArg> for TreeKind {
    fn from(arg: TreeArg) -> Self {
        match arg {
            TreeArg::Industries => TreeKind::Industries,
            TreeArg::Areas => TreeKind::Areas,
        }
    }
}

/// Aurora settings - edit job-search filters from the terminal
#[derive(Parser, Debug)]
#[command(name = "aurora-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Telegram user id from the settings link
    #[arg(long, global = true, value_name = "ID")]
    pub user_id: Option<i64>,

    /// Signature from the settings link
    #[arg(long, global = true, value_name = "SIGN")]
    pub sign: Option<String>,

    /// Config file to use instead of aurora.toml / the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and print the current settings
    Show,

    /// Edit one setting interactively, then save
    Edit {
        #[arg(value_enum)]
        target: EditTarget,
    },

    /// Print the id list a save would send for the given selection
    Collapse {
        /// Dictionary to resolve the ids against
        #[arg(long, value_enum)]
        tree: TreeArg,

        /// Selected ids (leaves or categories)
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
