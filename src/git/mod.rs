//! git
//!
//! Process-spawn boundary to the git command-line program.
//!
//! # Modules
//!
//! - [`runner`] - `ProcessRunner` trait, system runner, output merging
//! - [`interface`] - `Git` facade and repository discovery
//! - [`mock`] - Scripted runner for tests

pub mod interface;
pub mod mock;
pub mod runner;

pub use interface::{discover_repo, Git, RepoLocation};
pub use runner::{combine_output, CommandResult, ProcessRunner, RunError, SystemRunner, ERROR_TAG};
