//! engine::actions::basic
//!
//! Everyday commands: status, staging, committing, history and diffs.

use crate::core::types::Revision;
use crate::engine::{or_abort, or_invalid, ActionContext, ActionResult, Outcome};
use crate::ui::prompts::Delimiter;

use super::{batch, join_nonempty, not_tracked};

pub fn status(ctx: &mut ActionContext<'_>) -> ActionResult {
    Ok(Outcome::Footer(ctx.git(&["status"])?))
}

/// Stage files, then list everything staged.
pub fn add_files(ctx: &mut ActionContext<'_>) -> ActionResult {
    let files = or_abort!(ctx.ask_list(
        "Files to add, or '.' for everything (empty to go back): ",
        Delimiter::Whitespace,
    ));

    let mut args = vec!["add".to_string(), "--".to_string()];
    args.extend(files);
    let output = ctx.git(&args)?;
    let staged = ctx.git(&["diff", "--cached", "--name-only"])?;
    Ok(Outcome::Footer(format!(
        "{output}\n\n[LOG] Staged files:\n{staged}"
    )))
}

/// Commit with the typed message plus a timestamp.
pub fn commit(ctx: &mut ActionContext<'_>) -> ActionResult {
    let message = or_abort!(ctx.ask("Commit message (empty to go back): "));
    let full_message = format!("{message} ({})", ctx.timestamp());
    Ok(Outcome::Footer(ctx.git(&["commit", "-m", &full_message])?))
}

pub fn history(ctx: &mut ActionContext<'_>) -> ActionResult {
    Ok(Outcome::Footer(ctx.git(&["log", "--oneline", "--graph"])?))
}

pub fn tracked_files(ctx: &mut ActionContext<'_>) -> ActionResult {
    Ok(Outcome::Footer(
        ctx.git(&["ls-tree", "-r", "HEAD", "--name-only"])?,
    ))
}

/// Stop tracking each listed file, keeping it on disk.
pub fn remove_from_repo(ctx: &mut ActionContext<'_>) -> ActionResult {
    let files = or_abort!(ctx.ask_list(
        "Files to remove from the repository, comma separated (empty to go back): ",
        Delimiter::Char(','),
    ));

    let footer = batch(ctx, &files, |ctx, file| {
        let check = ctx.git.run(&["ls-files", "--error-unmatch", "--", file])?;
        if check.success() {
            ctx.git(&["rm", "--cached", "--", file])
        } else {
            Ok(not_tracked(file))
        }
    })?;
    Ok(Outcome::Footer(footer))
}

/// Stage everything and commit with a generated message.
pub fn auto_commit(ctx: &mut ActionContext<'_>) -> ActionResult {
    let added = ctx.git(&["add", "."])?;
    let message = format!("Auto commit ({})", ctx.timestamp());
    let committed = ctx.git(&["commit", "-m", &message])?;
    Ok(Outcome::Footer(join_nonempty([added, committed])))
}

/// Pick a commit by its position in the log and hard-reset to it.
pub fn reset_to_commit(ctx: &mut ActionContext<'_>) -> ActionResult {
    let result = ctx.git.run(&["log", "--oneline"])?;
    if !result.success() {
        return Ok(Outcome::Footer(result.text));
    }
    let log = result.text;
    let commits: Vec<&str> = log.lines().filter(|l| !l.trim().is_empty()).collect();
    if commits.is_empty() {
        return Ok(Outcome::footer("No commits to reset to."));
    }

    let mut listing = String::from("\nCommits:");
    for (i, commit) in commits.iter().enumerate() {
        listing.push_str(&format!("\n{i}: {commit}"));
    }
    ctx.show(&listing)?;

    let answer = or_abort!(ctx.ask("Number of the commit to reset to (empty to go back): "));
    let index: usize = or_invalid!(answer
        .parse::<usize>()
        .map_err(|_| format!("'{answer}' is not a commit number")));
    if index >= commits.len() {
        return Ok(Outcome::invalid(format!(
            "commit number {index} is out of range 0..={}",
            commits.len() - 1
        )));
    }

    let hash = commits[index]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    let hash = or_invalid!(Revision::new(hash));
    ctx.confirm(
        &format!("Reset to commit {hash}? Uncommitted changes will be lost"),
        |git| Ok(git.text(&["reset", "--hard", hash.as_str()])?),
    )
}

pub fn diff(ctx: &mut ActionContext<'_>) -> ActionResult {
    Ok(Outcome::Footer(ctx.git(&["diff"])?))
}

pub fn diff_commits(ctx: &mut ActionContext<'_>) -> ActionResult {
    let first = or_abort!(ctx.ask("First commit hash (empty to go back): "));
    let second = or_abort!(ctx.ask("Second commit hash (empty to go back): "));
    let first = or_invalid!(Revision::new(first));
    let second = or_invalid!(Revision::new(second));
    Ok(Outcome::Footer(
        ctx.git(&["diff", first.as_str(), second.as_str()])?,
    ))
}

/// Take one file out of the last commit and amend it.
pub fn drop_from_last_commit(ctx: &mut ActionContext<'_>) -> ActionResult {
    let file = or_abort!(ctx.ask("File to remove from the last commit (empty to go back): "));
    ctx.confirm(
        &format!("Remove {file} from the last commit? This rewrites history"),
        |git| {
            let reset = git.text(&["reset", "HEAD^", "--", file.as_str()])?;
            let amend = git.text(&["commit", "--amend", "--no-edit"])?;
            Ok(join_nonempty([reset, amend]))
        },
    )
}

/// Unstage each listed file.
pub fn unstage(ctx: &mut ActionContext<'_>) -> ActionResult {
    let files = or_abort!(ctx.ask_list(
        "Files to unstage, comma separated (empty to go back): ",
        Delimiter::Char(','),
    ));

    let footer = batch(ctx, &files, |ctx, file| {
        let output = ctx.git(&["reset", "--", file])?;
        Ok(if output.is_empty() {
            format!("{file}: unstaged")
        } else {
            format!("{file}: {output}")
        })
    })?;
    Ok(Outcome::Footer(footer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::actions::testing::{echo, run_handler};
    use crate::engine::CANCELLED;
    use crate::git::{CommandResult, ERROR_TAG};

    fn footer(result: ActionResult) -> String {
        match result.unwrap() {
            Outcome::Footer(f) => f,
            Outcome::Aborted => panic!("unexpected abort"),
        }
    }

    #[test]
    fn add_passes_files_after_separator() {
        let (result, runner, _, _) = run_handler(add_files, &["a.rs  -weird"], echo);
        let calls = runner.calls();
        assert_eq!(calls[0], ["add", "--", "a.rs", "-weird"]);
        assert_eq!(calls[1], ["diff", "--cached", "--name-only"]);
        assert!(footer(result).contains("[LOG] Staged files:"));
    }

    #[test]
    fn commit_appends_timestamp() {
        let (result, runner, _, _) = run_handler(commit, &["fix typo"], echo);
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][..2], ["commit", "-m"]);
        assert!(calls[0][2].starts_with("fix typo ("));
        assert!(calls[0][2].ends_with(')'));
        assert!(footer(result).starts_with("commit -m fix typo"));
    }

    #[test]
    fn failing_log_offers_nothing_to_reset() {
        let no_commits = "fatal: your current branch 'main' does not have any commits yet";
        let (result, runner, input, out) = run_handler(reset_to_commit, &["0", "yes"], move |_| {
            CommandResult::failed(no_commits, 128)
        });
        assert_eq!(footer(result), no_commits);
        assert_eq!(runner.calls(), [["log", "--oneline"]]);
        assert!(input.prompts().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn empty_prompt_spawns_nothing() {
        for handler in [add_files, commit, remove_from_repo, diff_commits, unstage] {
            let (result, runner, _, _) = run_handler(handler, &[""], echo);
            assert_eq!(result.unwrap(), Outcome::Aborted);
            assert_eq!(runner.call_count(), 0);
        }
    }

    #[test]
    fn remove_batch_continues_past_untracked() {
        let (result, runner, _, _) = run_handler(remove_from_repo, &["x, missing ,y"], |args| {
            if args[0] == "ls-files" && args[3] == "missing" {
                CommandResult::failed("error: pathspec 'missing' did not match", 1)
            } else if args[0] == "rm" {
                CommandResult::ok(format!("rm '{}'", args[3]))
            } else {
                CommandResult::ok(args[3].clone())
            }
        });
        assert_eq!(
            footer(result),
            format!("rm 'x'\n{ERROR_TAG} File missing is not found or not tracked.\nrm 'y'")
        );
        assert_eq!(runner.calls_to("rm").len(), 2);
        assert_eq!(runner.calls_to("ls-files").len(), 3);
    }

    fn five_commits(args: &[String]) -> CommandResult {
        match args[0].as_str() {
            "log" => CommandResult::ok("e5 five\nd4 four\nc3 three\nb2 two\na1 one"),
            _ => CommandResult::ok("HEAD is now at c3 three"),
        }
    }

    #[test]
    fn reset_rejects_out_of_range_and_garbage() {
        for answer in ["5", "abc", "-1"] {
            let (result, runner, input, _) = run_handler(reset_to_commit, &[answer], five_commits);
            assert!(footer(result).starts_with("Invalid input:"));
            assert!(runner.calls_to("reset").is_empty());
            assert_eq!(input.prompts().len(), 1);
        }
    }

    #[test]
    fn reset_selected_index_after_confirmation() {
        let (result, runner, input, out) =
            run_handler(reset_to_commit, &["2", "yes"], five_commits);
        assert_eq!(footer(result), "HEAD is now at c3 three");
        assert_eq!(runner.calls_to("reset"), [["reset", "--hard", "c3"]]);
        assert!(out.contains("0: e5 five"));
        assert!(out.contains("4: a1 one"));
        assert!(input.prompts()[1].contains("c3"));
    }

    #[test]
    fn reset_declined_runs_nothing() {
        let (result, runner, _, _) = run_handler(reset_to_commit, &["2", "no"], five_commits);
        assert_eq!(footer(result), CANCELLED);
        assert!(runner.calls_to("reset").is_empty());
    }

    #[test]
    fn reset_with_empty_history() {
        let (result, runner, input, _) =
            run_handler(reset_to_commit, &[], |_| CommandResult::ok(""));
        assert_eq!(footer(result), "No commits to reset to.");
        assert_eq!(runner.call_count(), 1);
        assert!(input.prompts().is_empty());
    }

    #[test]
    fn diff_commits_validates_revisions() {
        let (result, runner, _, _) = run_handler(diff_commits, &["abc", "--output=x"], echo);
        assert!(footer(result).starts_with("Invalid input:"));
        assert_eq!(runner.call_count(), 0);

        let (result, _, _, _) = run_handler(diff_commits, &["abc", "def"], echo);
        assert_eq!(footer(result), "diff abc def");
    }

    #[test]
    fn drop_from_last_commit_is_gated() {
        let (result, runner, _, _) = run_handler(drop_from_last_commit, &["a.rs", "nope"], echo);
        assert_eq!(footer(result), CANCELLED);
        assert_eq!(runner.call_count(), 0);

        let (result, runner, _, _) = run_handler(drop_from_last_commit, &["a.rs", "yes"], echo);
        assert_eq!(
            footer(result),
            "reset HEAD^ -- a.rs\ncommit --amend --no-edit"
        );
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn unstage_reports_one_line_per_file() {
        let (result, runner, _, _) =
            run_handler(unstage, &["a.rs,b.rs"], |_| CommandResult::ok(""));
        assert_eq!(footer(result), "a.rs: unstaged\nb.rs: unstaged");
        assert_eq!(runner.calls()[1], ["reset", "--", "b.rs"]);
    }

    #[test]
    fn auto_commit_adds_then_commits() {
        let (result, runner, _, _) = run_handler(auto_commit, &[], echo);
        let calls = runner.calls();
        assert_eq!(calls[0], ["add", "."]);
        assert!(calls[1][2].starts_with("Auto commit ("));
        assert!(footer(result).starts_with("add .\ncommit -m Auto commit"));
    }
}
