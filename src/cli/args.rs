//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--cwd <path>`: Run as if started in that directory
//! - `--debug`: Enable debug logging
//! - `--git <program>`: Collaborator program to run
//! - `--no-color` / `--no-clear`: Plain rendering
//! - `--log-file <path>`: Send logs to a file instead of stderr

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Settings;

/// gitmenu - Keyboard-driven menu for everyday git commands
#[derive(Parser, Debug)]
#[command(name = "gitmenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitmenu was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Program to run for every git command
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub git: Option<String>,

    /// Draw the menu without colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not clear the screen before each redraw
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Overlay command-line flags onto loaded settings.
    ///
    /// Flags win over every config file.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(git) = &self.git {
            settings.git = git.clone();
        }
        if self.no_color {
            settings.display.color = false;
        }
        if self.no_clear {
            settings.display.clear_screen = false;
        }
        if let Some(path) = &self.log_file {
            settings.log_file = Some(path.clone());
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the effective configuration as TOML
    #[command(
        long_about = "Print the effective configuration as TOML.\n\n\
            Built-in defaults are merged with the global file, the repository \
            file and command-line flags, in that order. Git is never run."
    )]
    Config,
}
