//! engine::actions::ignore
//!
//! Editing the ignore file in the working tree root. These actions touch the
//! file directly and never run git.

use std::io;

use tracing::warn;

use crate::core::ignore::{IgnoreFile, RemoveOutcome};
use crate::engine::{or_abort, ActionContext, ActionResult, Outcome};
use crate::git::ERROR_TAG;
use crate::ui::prompts::Delimiter;

fn ignore_file(ctx: &ActionContext<'_>) -> IgnoreFile {
    IgnoreFile::new(ctx.git.workdir().join(&ctx.settings.ignore_file))
}

fn display_name(ctx: &ActionContext<'_>) -> String {
    ctx.settings.ignore_file.display().to_string()
}

fn io_footer(name: &str, err: io::Error) -> Outcome {
    warn!(file = name, error = %err, "ignore file access failed");
    Outcome::Footer(format!("{ERROR_TAG} could not access {name}: {err}"))
}

pub fn view(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = display_name(ctx);
    Ok(match ignore_file(ctx).read() {
        Ok(None) => Outcome::Footer(format!("{name} not found.")),
        Ok(Some(contents)) if contents.trim().is_empty() => {
            Outcome::Footer(format!("{name} is empty."))
        }
        Ok(Some(contents)) => Outcome::Footer(contents.trim_end().to_string()),
        Err(e) => io_footer(&name, e),
    })
}

/// Append comma separated entries, one per line.
pub fn add(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = display_name(ctx);
    let entries = or_abort!(ctx.ask_list(
        &format!("Entries to add to {name}, comma separated (empty to go back): "),
        Delimiter::Char(','),
    ));

    Ok(match ignore_file(ctx).append(&entries) {
        Ok(()) => Outcome::Footer(format!(
            "Added {} {} to {name}.",
            entries.len(),
            if entries.len() == 1 { "entry" } else { "entries" }
        )),
        Err(e) => io_footer(&name, e),
    })
}

pub fn remove(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = display_name(ctx);
    let entry = or_abort!(ctx.ask(&format!(
        "Entry to remove from {name} (empty to go back): "
    )));

    Ok(match ignore_file(ctx).remove(&entry) {
        Ok(RemoveOutcome::Missing) => Outcome::Footer(format!("{name} not found.")),
        Ok(RemoveOutcome::Removed(0)) => {
            Outcome::Footer(format!("'{entry}' is not in {name}."))
        }
        Ok(RemoveOutcome::Removed(_)) => {
            Outcome::Footer(format!("Removed '{entry}' from {name}."))
        }
        Err(e) => io_footer(&name, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Settings;
    use crate::engine::actions::testing::{echo, run_handler_with};
    use std::fs;
    use tempfile::TempDir;

    fn run_in(
        temp: &TempDir,
        handler: fn(&mut ActionContext<'_>) -> ActionResult,
        lines: &[&str],
    ) -> String {
        let settings = Settings::default();
        let workdir = temp.path().to_string_lossy().into_owned();
        let (result, runner, _, _) = run_handler_with(handler, lines, echo, &settings, &workdir);
        assert_eq!(runner.call_count(), 0);
        match result.unwrap() {
            Outcome::Footer(f) => f,
            Outcome::Aborted => panic!("unexpected abort"),
        }
    }

    #[test]
    fn view_reports_missing_and_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(run_in(&temp, view, &[]), ".gitignore not found.");

        fs::write(temp.path().join(".gitignore"), "\n").unwrap();
        assert_eq!(run_in(&temp, view, &[]), ".gitignore is empty.");

        fs::write(temp.path().join(".gitignore"), "target/\n*.log\n").unwrap();
        assert_eq!(run_in(&temp, view, &[]), "target/\n*.log");
    }

    #[test]
    fn add_then_remove() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".gitignore");
        fs::write(&path, "target/").unwrap();

        assert_eq!(
            run_in(&temp, add, &["*.log, build/"]),
            "Added 2 entries to .gitignore."
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "target/\n*.log\nbuild/\n");

        assert_eq!(
            run_in(&temp, remove, &[" *.log "]),
            "Removed '*.log' from .gitignore."
        );
        assert_eq!(
            run_in(&temp, remove, &["*.log"]),
            "'*.log' is not in .gitignore."
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "target/\nbuild/\n");
    }

    #[test]
    fn remove_without_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(run_in(&temp, remove, &["x"]), ".gitignore not found.");
    }

    #[test]
    fn empty_answer_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::default();
        let workdir = temp.path().to_string_lossy().into_owned();
        let (result, _, _, _) = run_handler_with(add, &[" , "], echo, &settings, &workdir);
        assert_eq!(result.unwrap(), Outcome::Aborted);
        assert!(!temp.path().join(".gitignore").exists());
    }
}
