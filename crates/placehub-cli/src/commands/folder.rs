//! Folder restructuring CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use placehub_core::config::AppConfig;
use placehub_core::error::AppError;
use placehub_core::types::NodeId;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Rename a folder by moving every item under it
    Rename {
        /// Folder node id, e.g. `folder-team.web`
        folder_id: String,
        /// New folder name (letters and digits only)
        name: String,
    },
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::connect(config).await?;

    match &args.command {
        FolderCommand::Rename { folder_id, name } => {
            let report = client
                .rename_folder(&NodeId::from(folder_id.as_str()), name)
                .await?;
            output::print_move_report(&report);
        }
    }

    output::print_forest(&client.snapshot().forest, format);
    Ok(())
}
