//! Subcommand implementations.

use anyhow::Result;

use crate::chef::ChefClient;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Single question command handler.
pub mod ask;

/// Interactive session command handler.
pub mod chat;

/// Meal prep plan command handler.
pub mod meal_plan;

/// Protein calculator command handler.
pub mod protein;

/// Provider listing command handler.
pub mod providers;

/// Resolves configuration and builds the one client used for the whole run.
pub fn load_client(options: &ResolveOptions) -> Result<(ResolvedConfig, ChefClient)> {
    let file_config = ConfigManager::new()?.load_or_default()?;
    let config = resolve_config(options, &file_config)?;
    tracing::debug!(provider = %config.provider_name, model = %config.model, "resolved configuration");

    let client = ChefClient::from_config(&config);
    Ok((config, client))
}
