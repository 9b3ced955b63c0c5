//! engine::dispatch
//!
//! Routing from action identifiers to handlers.
//!
//! The table is built once per session. Invoking an action runs its handler
//! synchronously to completion and returns the footer to display.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::actions::{basic, branch, ignore, remote, repo};
use super::catalog::{ActionId, Binding, MenuSpec};
use super::{ActionContext, ActionResult, Outcome};
use crate::git::ERROR_TAG;

/// A bound unit of work.
pub type Handler = fn(&mut ActionContext<'_>) -> ActionResult;

/// Table from [`ActionId`] to [`Handler`].
#[derive(Clone)]
pub struct Dispatcher {
    handlers: HashMap<ActionId, Handler>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("bound", &self.handlers.len())
            .finish()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

impl Dispatcher {
    /// An empty table.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The table with every catalog action bound.
    pub fn standard() -> Self {
        use ActionId::*;

        let table: [(ActionId, Handler); 34] = [
            (Status, basic::status),
            (AddFiles, basic::add_files),
            (Commit, basic::commit),
            (History, basic::history),
            (TrackedFiles, basic::tracked_files),
            (RemoveFromRepo, basic::remove_from_repo),
            (AutoCommit, basic::auto_commit),
            (ResetToCommit, basic::reset_to_commit),
            (Diff, basic::diff),
            (DiffCommits, basic::diff_commits),
            (DropFromLastCommit, basic::drop_from_last_commit),
            (Unstage, basic::unstage),
            (ListBranches, branch::list),
            (CreateBranch, branch::create),
            (SwitchBranch, branch::switch),
            (DeleteBranch, branch::delete),
            (RenameBranch, branch::rename),
            (ForceDeleteBranch, branch::force_delete),
            (MergeBranch, branch::merge),
            (AbortMerge, branch::abort_merge),
            (UnsetUpstream, branch::unset_upstream),
            (BranchFromCommit, branch::from_commit),
            (PruneRemote, branch::prune_remote),
            (DiffBranches, branch::diff_between),
            (LogBetweenBranches, branch::log_between),
            (ListRemotes, remote::list),
            (AddRemote, remote::add),
            (RemoveRemote, remote::remove),
            (Pull, remote::pull),
            (Push, remote::push),
            (ViewIgnore, ignore::view),
            (AddIgnore, ignore::add),
            (RemoveIgnore, ignore::remove),
            (ClearRepository, repo::clear),
        ];

        let mut dispatcher = Self::empty();
        for (id, handler) in table {
            dispatcher.bind(id, handler);
        }
        dispatcher
    }

    /// Bind (or rebind) `id` to `handler`.
    pub fn bind(&mut self, id: ActionId, handler: Handler) {
        self.handlers.insert(id, handler);
    }

    pub fn is_bound(&self, id: ActionId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Run the handler bound to `id`.
    pub fn invoke(&self, id: ActionId, ctx: &mut ActionContext<'_>) -> ActionResult {
        match self.handlers.get(&id) {
            Some(handler) => {
                debug!(action = ?id, "invoking action");
                handler(ctx)
            }
            None => {
                warn!(action = ?id, "no handler bound");
                Ok(Outcome::footer(format!(
                    "{ERROR_TAG} no handler bound for {id:?}"
                )))
            }
        }
    }

    /// Run the action bound to entry `index` of `spec`.
    ///
    /// Entries that are not actions, and indices out of range, produce an
    /// error footer without running anything.
    pub fn invoke_at(
        &self,
        spec: &MenuSpec,
        index: usize,
        ctx: &mut ActionContext<'_>,
    ) -> ActionResult {
        match spec.binding(index) {
            Some(Binding::Run(id)) => self.invoke(id, ctx),
            other => Ok(Outcome::footer(format!(
                "{ERROR_TAG} entry {index} of {:?} is not an action ({other:?})",
                spec.id
            ))),
        }
    }
}
