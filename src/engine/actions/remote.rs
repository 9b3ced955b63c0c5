//! engine::actions::remote
//!
//! Remote repositories: list, add, remove, pull and push.

use crate::core::types::{validate_url, BranchName, RemoteName};
use crate::engine::{or_abort, or_invalid, ActionContext, ActionResult, Outcome};

pub fn list(ctx: &mut ActionContext<'_>) -> ActionResult {
    let output = ctx.git(&["remote", "-v"])?;
    Ok(Outcome::Footer(if output.is_empty() {
        "No remotes configured.".to_string()
    } else {
        output
    }))
}

pub fn add(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = or_abort!(ctx.ask("Remote name (empty to go back): "));
    let url = or_abort!(ctx.ask("Remote url (empty to go back): "));
    let name = or_invalid!(RemoteName::new(name));
    let url = or_invalid!(validate_url(&url));
    let output = ctx.git(&["remote", "add", name.as_str(), url])?;
    Ok(Outcome::Footer(if output.is_empty() {
        format!("Remote {name} added: {url}")
    } else {
        output
    }))
}

pub fn remove(ctx: &mut ActionContext<'_>) -> ActionResult {
    let name = or_abort!(ctx.ask("Remote to remove (empty to go back): "));
    let name = or_invalid!(RemoteName::new(name));
    let output = ctx.git(&["remote", "remove", name.as_str()])?;
    Ok(Outcome::Footer(if output.is_empty() {
        format!("Remote {name} removed.")
    } else {
        output
    }))
}

/// Ask for the branch to sync, defaulting to the configured one.
fn sync_target(ctx: &mut ActionContext<'_>, verb: &str) -> ActionResult {
    let remote = or_invalid!(RemoteName::new(ctx.settings.remote.clone()));
    let default = ctx.settings.default_branch.clone();
    let prompt = format!("Branch to {verb} [{default}]: ");
    let branch = or_abort!(ctx.ask_or(&prompt, &default));
    let branch = or_invalid!(BranchName::new(branch));
    Ok(Outcome::Footer(ctx.git(&[
        verb,
        remote.as_str(),
        branch.as_str(),
    ])?))
}

pub fn pull(ctx: &mut ActionContext<'_>) -> ActionResult {
    sync_target(ctx, "pull")
}

pub fn push(ctx: &mut ActionContext<'_>) -> ActionResult {
    sync_target(ctx, "push")
}
