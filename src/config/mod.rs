//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ChefConfig, ConfigFile, ConfigManager, DEFAULT_MODEL, DEFAULT_PROVIDER, ProviderConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
