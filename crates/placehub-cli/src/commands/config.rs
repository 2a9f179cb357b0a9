//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use placehub_core::config::AppConfig;
use placehub_core::error::AppError;
use placehub_store::{ItemStore, StoreManager};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration and the selected store backend
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => match StoreManager::new(&config.store) {
            Ok(store) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv("Store", store.backend_name());
                output::print_kv("Container", &config.store.container_id);
                output::print_kv("Log level", &config.logging.level);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
