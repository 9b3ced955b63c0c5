//! engine::actions::branch
//!
//! Branch management. Every typed name goes through [`BranchName`] before it
//! reaches git, so nothing typed here can be read as an option.

use crate::core::types::{BranchName, RemoteName, Revision};
use crate::engine::{or_abort, or_invalid, ActionContext, ActionResult, Outcome};

/// Prompt for a branch name and validate it.
macro_rules! branch_prompt {
    ($ctx:expr, $prompt:expr) => {
        or_invalid!(BranchName::new(or_abort!($ctx.ask($prompt))))
    };
}

pub fn list(ctx: &mut ActionContext<'_>) -> ActionResult {
    Ok(Outcome::Footer(ctx.git(&["branch"])?))
}

pub fn create(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = branch_prompt!(ctx, "New branch name (empty to go back): ");
    let output = ctx.git(&["branch", name.as_str()])?;
    Ok(Outcome::Footer(if output.is_empty() {
        format!("Branch {name} created.")
    } else {
        output
    }))
}

pub fn switch(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = branch_prompt!(ctx, "Branch to switch to (empty to go back): ");
    Ok(Outcome::Footer(ctx.git(&["checkout", name.as_str()])?))
}

pub fn delete(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = branch_prompt!(ctx, "Branch to delete (empty to go back): ");
    Ok(Outcome::Footer(ctx.git(&["branch", "-d", name.as_str()])?))
}

pub fn rename(ctx: &mut ActionContext<'_>) -> ActionResult {
    let old = branch_prompt!(ctx, "Branch to rename (empty to go back): ");
    let new = branch_prompt!(ctx, "New name (empty to go back): ");
    let output = ctx.git(&["branch", "-m", old.as_str(), new.as_str()])?;
    Ok(Outcome::Footer(if output.is_empty() {
        format!("Branch {old} renamed to {new}.")
    } else {
        output
    }))
}

/// Delete a branch even if it is not merged.
pub fn force_delete(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = branch_prompt!(ctx, "Branch to force delete (empty to go back): ");
    ctx.confirm(
        &format!("Force delete {name}? Unmerged commits will be lost"),
        |git| Ok(git.text(&["branch", "-D", name.as_str()])?),
    )
}

/// Merge a branch into the current one.
pub fn merge(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = branch_prompt!(ctx, "Branch to merge into the current one (empty to go back): ");
    Ok(Outcome::Footer(ctx.git(&["merge", name.as_str()])?))
}

pub fn abort_merge(ctx: &mut ActionContext<'_>) -> ActionResult {
    ctx.confirm("Abort the merge in progress? Merge changes will be lost", |git| {
        let output = git.text(&["merge", "--abort"])?;
        Ok(if output.is_empty() {
            "Merge aborted.".to_string()
        } else {
            output
        })
    })
}

pub fn unset_upstream(ctx: &mut ActionContext<'_>) -> ActionResult {
    Ok(Outcome::Footer(ctx.git(&["branch", "--unset-upstream"])?))
}

/// Create and check out a branch starting at a commit.
pub fn from_commit(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = branch_prompt!(ctx, "New branch name (empty to go back): ");
    let start = or_abort!(ctx.ask("Commit to start from (empty to go back): "));
    let start = or_invalid!(Revision::new(start));
    Ok(Outcome::Footer(ctx.git(&[
        "checkout",
        "-b",
        name.as_str(),
        start.as_str(),
    ])?))
}

/// Drop remote-tracking branches that no longer exist on the remote.
pub fn prune_remote(ctx: &mut ActionContext<'_>) -> ActionResult {
    let remote = or_invalid!(RemoteName::new(ctx.settings.remote.clone()));
    let output = ctx.git(&["remote", "prune", remote.as_str()])?;
    Ok(Outcome::Footer(if output.is_empty() {
        format!("Nothing to prune on {remote}.")
    } else {
        output
    }))
}

fn branch_range(first: &BranchName, second: &BranchName) -> Revision {
    Revision::range(&first.into(), &second.into())
}

/// Changes on the second branch since it diverged from the first.
pub fn diff_between(ctx: &mut ActionContext<'_>) -> ActionResult {
    let first = branch_prompt!(ctx, "First branch (empty to go back): ");
    let second = branch_prompt!(ctx, "Second branch (empty to go back): ");
    let range = branch_range(&first, &second);
    Ok(Outcome::Footer(ctx.git(&["diff", range.as_str()])?))
}

/// Commits on the second branch that are not on the first.
pub fn log_between(ctx: &mut ActionContext<'_>) -> ActionResult {
    let first = branch_prompt!(ctx, "First branch (empty to go back): ");
    let second = branch_prompt!(ctx, "Second branch (empty to go back): ");
    let range = branch_range(&first, &second);
    let output = ctx.git(&["log", "--oneline", range.as_str()])?;
    Ok(Outcome::Footer(if output.is_empty() {
        format!("No commits in {range}.")
    } else {
        output
    }))
}
