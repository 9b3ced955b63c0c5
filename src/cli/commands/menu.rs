//! menu command - Run the interactive session

use std::io;
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::{info, warn};

use crate::core::config::Settings;
use crate::engine::Session;
use crate::git::{Git, RepoLocation, SystemRunner};
use crate::ui::input::TerminalInput;

/// Start the menu in the repository enclosing `cwd`.
///
/// Without a repository the session still runs in `cwd`; git reports the
/// problem in the footer.
pub fn menu(settings: &Settings, repo: Option<RepoLocation>, cwd: &Path) -> Result<()> {
    let workdir = match repo {
        Some(location) => location.workdir,
        None => {
            warn!(cwd = %cwd.display(), "not inside a repository; running in the given directory");
            cwd.to_path_buf()
        }
    };

    let mut git = Git::new(Box::new(SystemRunner), settings.git.as_str(), workdir);
    let version = git
        .preflight()
        .with_context(|| format!("cannot run '{}'", settings.git))?;
    info!(%version, "collaborator available");

    let mut input = TerminalInput;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = Session::new(&mut git, &mut input, &mut out, settings)
        .run()
        .context("menu session failed")?;
    info!(actions = summary.actions_run, "menu closed");
    Ok(())
}
