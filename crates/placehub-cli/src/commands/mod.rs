//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;
pub mod item;
pub mod tree;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use placehub_core::config::AppConfig;
use placehub_core::error::AppError;
use placehub_core::types::ContainerId;
use placehub_service::{ReconciliationClient, TreeState};
use placehub_store::StoreManager;

/// PlaceHub: organize items into a dot-path hierarchy
#[derive(Debug, Parser)]
#[command(name = "placehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay (loads `config/{env}.toml` when present)
    #[arg(short, long, env = "PLACEHUB_ENV", default_value = "development")]
    pub env: String,

    /// Container to operate on (overrides `store.container_id`)
    #[arg(long)]
    pub container: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the derived tree and resolve drop targets
    Tree(tree::TreeArgs),
    /// Move, rename, create and delete items
    Item(item::ItemArgs),
    /// Restructure folders
    Folder(folder::FolderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load configuration from the selected file and environment
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        let mut config = AppConfig::load(&self.config, &self.env)?;
        if let Some(container) = &self.container {
            config.store.container_id = container.clone();
        }
        Ok(config)
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree(args) => tree::execute(args, config, self.format).await,
            Commands::Item(args) => item::execute(args, config, self.format).await,
            Commands::Folder(args) => folder::execute(args, config, self.format).await,
            Commands::Config(args) => config::execute(args, config, &self.config, self.format),
        }
    }
}

/// Helper: build a reconciliation client from config and load the first snapshot
pub async fn connect(config: &AppConfig) -> Result<ReconciliationClient, AppError> {
    let store = StoreManager::new(&config.store)?;
    let state = Arc::new(TreeState::new(config.notices.buffer_size));
    let client = ReconciliationClient::new(
        Arc::new(store),
        ContainerId::new(config.store.container_id.clone()),
        state,
    );
    client.refresh().await?;
    Ok(client)
}
