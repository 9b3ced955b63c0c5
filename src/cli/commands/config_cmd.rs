//! config command - Print the effective configuration

use anyhow::{Context as _, Result};

use crate::core::config::Settings;

/// Serialize `settings` as TOML.
pub fn render_settings(settings: &Settings) -> Result<String> {
    toml::to_string(settings).context("failed to serialize settings")
}

/// Print the effective configuration.
pub fn config(settings: &Settings) -> Result<()> {
    print!("{}", render_settings(settings)?);
    Ok(())
}
