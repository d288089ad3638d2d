//! XDG-style path utilities for configuration.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations
//! so the config file lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "chef";

/// Returns the configuration directory for chef.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/chef` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/chef` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
