//! cli
//!
//! Command-line interface layer for gitmenu.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and set up logging
//! - Delegate to command handlers
//!
//! The interactive loop itself lives in [`crate::engine`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::git::discover_repo;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GITMENU_LOG";

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let cwd = match &cli.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to read the current directory")?,
    };
    let repo = discover_repo(&cwd);

    let loaded = Config::load(repo.as_ref().map(|r| r.git_dir.as_path()))
        .context("failed to load configuration")?;
    let mut settings = loaded.config.settings();
    cli.apply_overrides(&mut settings);

    init_tracing(cli.debug, settings.log_file.as_deref())?;
    for warning in &loaded.warnings {
        warn!(path = %warning.path.display(), "{}", warning.message);
    }

    match cli.command {
        Some(Command::Config) => commands::config(&settings),
        None => commands::menu(&settings, repo, &cwd),
    }
}

/// Install the global subscriber.
///
/// The filter comes from `GITMENU_LOG` (default `warn`); `--debug` forces
/// `debug`. The menu owns the terminal, so a configured log file takes the
/// output instead of stderr.
fn init_tracing(debug: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}
