//! git::interface
//!
//! The single doorway to the collaborator program.
//!
//! [`Git`] pins the program name and the working directory and forwards
//! argument vectors to a [`ProcessRunner`]. Every action goes through it, so
//! the engine never spawns a process any other way.
//!
//! Repository discovery uses `git2` to find the work tree enclosing the
//! directory gitmenu was started in; commands then run from the work tree
//! root and the ignore file is resolved against it.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::runner::{CommandResult, ProcessRunner, RunError};

/// Where a repository lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    /// Root of the work tree.
    pub workdir: PathBuf,
    /// The `.git` directory (or the worktree's git dir).
    pub git_dir: PathBuf,
}

/// Find the repository enclosing `start`.
///
/// Returns `None` when `start` is not inside a repository or the repository
/// is bare.
pub fn discover_repo(start: &Path) -> Option<RepoLocation> {
    match git2::Repository::discover(start) {
        Ok(repo) => {
            let workdir = repo.workdir()?.to_path_buf();
            let location = RepoLocation {
                workdir,
                git_dir: repo.path().to_path_buf(),
            };
            debug!(workdir = %location.workdir.display(), "discovered repository");
            Some(location)
        }
        Err(e) => {
            warn!(start = %start.display(), error = %e.message(), "no repository found");
            None
        }
    }
}

/// Runs the collaborator program in a fixed directory.
pub struct Git {
    runner: Box<dyn ProcessRunner>,
    program: String,
    workdir: PathBuf,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("program", &self.program)
            .field("workdir", &self.workdir)
            .finish_non_exhaustive()
    }
}

impl Git {
    pub fn new(
        runner: Box<dyn ProcessRunner>,
        program: impl Into<String>,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run one git command.
    ///
    /// # Errors
    ///
    /// Returns `RunError` if the program could not be started.
    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> Result<CommandResult, RunError> {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        self.runner.run(&self.program, &args, &self.workdir)
    }

    /// Run one git command and keep only its text.
    ///
    /// # Errors
    ///
    /// Returns `RunError` if the program could not be started.
    pub fn text<S: AsRef<str>>(&mut self, args: &[S]) -> Result<String, RunError> {
        Ok(self.run(args)?.text)
    }

    /// Check that the program can be started at all.
    ///
    /// Returns the version line on success.
    ///
    /// # Errors
    ///
    /// Returns `RunError::ToolMissing` when the program is absent.
    pub fn preflight(&mut self) -> Result<String, RunError> {
        let version = self.text(&["--version"])?;
        debug!(program = %self.program, %version, "preflight passed");
        Ok(version)
    }
}
