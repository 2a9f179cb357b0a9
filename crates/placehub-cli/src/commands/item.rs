//! Item mutation CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use placehub_core::config::AppConfig;
use placehub_core::error::AppError;
use placehub_core::types::{ItemId, NodeId};
use placehub_service::ItemPath;

/// Arguments for item commands
#[derive(Debug, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item subcommands
#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// Move nodes into a folder (or to the top level)
    Move {
        /// Dragged node ids, e.g. `item-42`
        #[arg(required = true)]
        nodes: Vec<String>,
        /// Target folder node id, e.g. `folder-team.web` (omit for top level)
        #[arg(short, long)]
        target: Option<String>,
        /// Requested sibling position (accepted, not stored)
        #[arg(short, long, default_value = "0")]
        index: usize,
    },
    /// Change an item's display name
    Rename {
        /// Item ID
        item_id: String,
        /// New display name
        name: String,
    },
    /// Set an item's path directly (empty string means top level)
    SetPath {
        /// Item ID
        item_id: String,
        /// Dot-segmented path
        #[arg(value_parser = ItemPath::from_input)]
        path: ItemPath,
    },
    /// Create an item inside a folder
    Create {
        /// Display name
        name: String,
        /// Target folder node id (omit for top level)
        #[arg(short, long)]
        target: Option<String>,
    },
    /// Delete an item
    Delete {
        /// Item ID
        item_id: String,
    },
}

/// Execute item commands
pub async fn execute(
    args: &ItemArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::connect(config).await?;

    match &args.command {
        ItemCommand::Move {
            nodes,
            target,
            index,
        } => {
            let dragged: Vec<NodeId> = nodes.iter().map(|n| NodeId::from(n.as_str())).collect();
            let target = target.as_deref().map(NodeId::from);
            let report = client.move_items(&dragged, target.as_ref(), *index).await;
            output::print_move_report(&report);
        }
        ItemCommand::Rename { item_id, name } => {
            let outcome = client.rename(&ItemId::from(item_id.as_str()), name).await?;
            output::print_outcome(&format!("Renamed '{}' to '{}'", item_id, name), &outcome);
        }
        ItemCommand::SetPath { item_id, path } => {
            let report = client
                .set_path(&ItemId::from(item_id.as_str()), path)
                .await;
            output::print_move_report(&report);
        }
        ItemCommand::Create { name, target } => {
            let target = target.as_deref().map(NodeId::from);
            let outcome = client.create_under(target.as_ref(), name).await?;
            match &outcome.value {
                Some(item) => output::print_item(item, format),
                None => output::print_outcome("Create", &outcome),
            }
        }
        ItemCommand::Delete { item_id } => {
            let outcome = client.delete(&ItemId::from(item_id.as_str())).await;
            output::print_outcome(&format!("Deleted '{}'", item_id), &outcome);
        }
    }

    output::print_forest(&client.snapshot().forest, format);
    Ok(())
}
