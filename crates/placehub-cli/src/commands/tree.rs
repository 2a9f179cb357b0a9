//! Tree inspection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use placehub_core::config::AppConfig;
use placehub_core::error::AppError;
use placehub_core::types::NodeId;
use placehub_service::PlacementResolver;

/// Arguments for tree commands
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Tree subcommand
    #[command(subcommand)]
    pub command: TreeCommand,
}

/// Tree subcommands
#[derive(Debug, Subcommand)]
pub enum TreeCommand {
    /// Show the folder/leaf forest
    Show,
    /// List the flat item collection
    Items,
    /// Show the path an item would receive when dropped on a folder
    Resolve {
        /// Target folder node id (omit for top level)
        #[arg(short, long)]
        target: Option<String>,
        /// Requested sibling position (accepted, not stored)
        #[arg(short, long, default_value = "0")]
        index: usize,
    },
}

/// Item display row
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    /// Item ID
    id: String,
    /// Display name
    name: String,
    /// Path
    path: String,
    /// Tree node ID
    node: String,
}

/// Execute tree commands
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::connect(config).await?;
    let snapshot = client.snapshot();

    match &args.command {
        TreeCommand::Show => {
            output::print_forest(&snapshot.forest, format);
        }
        TreeCommand::Items => {
            let rows: Vec<ItemRow> = snapshot
                .items
                .iter()
                .map(|i| ItemRow {
                    id: i.id.to_string(),
                    name: i.display_name.clone(),
                    path: i.path.clone(),
                    node: NodeId::item(&i.id).to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        TreeCommand::Resolve { target, index } => {
            let target = target.as_deref().map(NodeId::from);
            let path = PlacementResolver::target_path(&snapshot.forest, target.as_ref());
            tracing::debug!(index, "Resolve ignores the sibling index");
            output::print_kv("path", &path);
        }
    }

    Ok(())
}
