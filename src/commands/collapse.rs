//! Collapse command handler

use anyhow::{Context, Result};

use aurora_settings::domain::entities::{SelectionSet, TreeKind};
use aurora_settings::domain::ports::DictionarySource;
use aurora_settings::domain::services::collapse;
use aurora_settings::domain::value_objects::NodeId;
use aurora_settings::presentation::{factory, Cli};

use super::CommandContext;

/// Print the wire-format id list for `ids` as a JSON array
pub fn cmd_collapse(cli: &Cli, kind: TreeKind, ids: &[String]) -> Result<()> {
    let ctx = CommandContext::new(cli)?;
    let dictionaries = factory::create_dictionaries(&ctx.config)?;
    let index = dictionaries
        .load_index(kind)
        .with_context(|| format!("failed to load the {} dictionary", kind))?;

    let selection = SelectionSet::from_ids(ids.iter().map(NodeId::new));
    let unknown: Vec<&NodeId> = selection.iter().filter(|id| !index.contains(id)).collect();
    if !unknown.is_empty() {
        tracing::warn!(tree = %kind, count = unknown.len(), "ids not in dictionary, passed through");
    }

    let collapsed = collapse(&index, &selection);
    println!("{}", serde_json::to_string(&collapsed)?);
    Ok(())
}
