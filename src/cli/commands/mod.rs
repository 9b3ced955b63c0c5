//! cli::commands
//!
//! Command handlers.
//!
//! Each handler receives the effective settings, does its work and formats
//! its own output. Errors are reported with `anyhow` context by `main`.

mod config_cmd;
mod menu;

pub use config_cmd::{config, render_settings};
pub use menu::menu;
