//! engine::catalog
//!
//! The menus and what each entry does.
//!
//! Entries are bound to stable [`ActionId`]s rather than to their position,
//! so reordering labels never changes behavior. The [`Dispatcher`] maps each
//! identifier to its handler.
//!
//! [`Dispatcher`]: super::Dispatcher

use crate::ui::menu::{EmptyMenu, Menu, MenuItem};

/// Identifies one menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    Main,
    Basic,
    Branches,
    Remotes,
    Ignore,
}

/// Identifies one action handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    // Basic commands
    Status,
    AddFiles,
    Commit,
    History,
    TrackedFiles,
    RemoveFromRepo,
    AutoCommit,
    ResetToCommit,
    Diff,
    DiffCommits,
    DropFromLastCommit,
    Unstage,

    // Branches
    ListBranches,
    CreateBranch,
    SwitchBranch,
    DeleteBranch,
    RenameBranch,
    ForceDeleteBranch,
    MergeBranch,
    AbortMerge,
    UnsetUpstream,
    BranchFromCommit,
    PruneRemote,
    DiffBranches,
    LogBetweenBranches,

    // Remotes
    ListRemotes,
    AddRemote,
    RemoveRemote,
    Pull,
    Push,

    // Ignore file
    ViewIgnore,
    AddIgnore,
    RemoveIgnore,

    // Repository
    ClearRepository,
}

impl ActionId {
    /// Every action, in catalog order.
    pub const ALL: [ActionId; 34] = [
        ActionId::Status,
        ActionId::AddFiles,
        ActionId::Commit,
        ActionId::History,
        ActionId::TrackedFiles,
        ActionId::RemoveFromRepo,
        ActionId::AutoCommit,
        ActionId::ResetToCommit,
        ActionId::Diff,
        ActionId::DiffCommits,
        ActionId::DropFromLastCommit,
        ActionId::Unstage,
        ActionId::ListBranches,
        ActionId::CreateBranch,
        ActionId::SwitchBranch,
        ActionId::DeleteBranch,
        ActionId::RenameBranch,
        ActionId::ForceDeleteBranch,
        ActionId::MergeBranch,
        ActionId::AbortMerge,
        ActionId::UnsetUpstream,
        ActionId::BranchFromCommit,
        ActionId::PruneRemote,
        ActionId::DiffBranches,
        ActionId::LogBetweenBranches,
        ActionId::ListRemotes,
        ActionId::AddRemote,
        ActionId::RemoveRemote,
        ActionId::Pull,
        ActionId::Push,
        ActionId::ViewIgnore,
        ActionId::AddIgnore,
        ActionId::RemoveIgnore,
        ActionId::ClearRepository,
    ];

    /// Rewrites history or discards state; must run behind the gate.
    pub fn is_destructive(self) -> bool {
        matches!(
            self,
            ActionId::ResetToCommit
                | ActionId::DropFromLastCommit
                | ActionId::ForceDeleteBranch
                | ActionId::AbortMerge
                | ActionId::ClearRepository
        )
    }
}

/// What selecting an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Run an action and show its result.
    Run(ActionId),
    /// Push a sub-menu.
    Open(MenuId),
    /// Pop back to the parent menu.
    Return,
    /// End the session.
    Exit,
}

impl Binding {
    pub fn is_terminal(self) -> bool {
        matches!(self, Binding::Return | Binding::Exit)
    }
}

/// One labeled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub label: &'static str,
    pub binding: Binding,
}

const fn run(label: &'static str, action: ActionId) -> Entry {
    Entry {
        label,
        binding: Binding::Run(action),
    }
}

const fn open(label: &'static str, menu: MenuId) -> Entry {
    Entry {
        label,
        binding: Binding::Open(menu),
    }
}

const RETURN: Entry = Entry {
    label: "Back to main menu",
    binding: Binding::Return,
};

/// A menu with its bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    pub id: MenuId,
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

impl MenuSpec {
    /// The displayable menu.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMenu`] if the spec has no entries.
    pub fn menu(&self) -> Result<Menu, EmptyMenu> {
        Menu::new(
            self.title,
            self.entries
                .iter()
                .map(|e| MenuItem {
                    label: e.label.to_string(),
                    is_terminal: e.binding.is_terminal(),
                })
                .collect(),
        )
    }

    /// Binding of the entry at `index`.
    pub fn binding(&self, index: usize) -> Option<Binding> {
        self.entries.get(index).map(|e| e.binding)
    }

    /// Index of the entry bound to `binding`.
    pub fn position(&self, binding: Binding) -> Option<usize> {
        self.entries.iter().position(|e| e.binding == binding)
    }

    /// Build the menu for `id`.
    pub fn for_menu(id: MenuId) -> Self {
        use ActionId::*;

        let (title, entries) = match id {
            MenuId::Main => (
                "Git menu",
                vec![
                    open("Basic commands", MenuId::Basic),
                    open("Branch management", MenuId::Branches),
                    open("Remote repositories", MenuId::Remotes),
                    open(".gitignore management", MenuId::Ignore),
                    run("Clear repository index", ClearRepository),
                    Entry {
                        label: "Exit",
                        binding: Binding::Exit,
                    },
                ],
            ),
            MenuId::Basic => (
                "Basic commands",
                vec![
                    run("Repository status", Status),
                    run("Add files", AddFiles),
                    run("Commit changes", Commit),
                    run("Commit history", History),
                    run("List committed files", TrackedFiles),
                    run("Remove files from repository", RemoveFromRepo),
                    run("Auto-commit all files", AutoCommit),
                    run("Reset to commit", ResetToCommit),
                    run("Show changes", Diff),
                    run("Compare two commits", DiffCommits),
                    run("Remove file from last commit", DropFromLastCommit),
                    run("Unstage files", Unstage),
                    RETURN,
                ],
            ),
            MenuId::Branches => (
                "Branch management",
                vec![
                    run("List branches", ListBranches),
                    run("Create branch", CreateBranch),
                    run("Switch branch", SwitchBranch),
                    run("Delete branch", DeleteBranch),
                    run("Rename branch", RenameBranch),
                    run("Force delete branch", ForceDeleteBranch),
                    run("Merge branch into current", MergeBranch),
                    run("Abort merge", AbortMerge),
                    run("Unset upstream tracking", UnsetUpstream),
                    run("Create branch from commit", BranchFromCommit),
                    run("Prune stale remote branches", PruneRemote),
                    run("Changes between branches", DiffBranches),
                    run("Commits between branches", LogBetweenBranches),
                    RETURN,
                ],
            ),
            MenuId::Remotes => (
                "Remote repositories",
                vec![
                    run("List remotes", ListRemotes),
                    run("Add remote", AddRemote),
                    run("Remove remote", RemoveRemote),
                    run("Pull changes", Pull),
                    run("Push changes", Push),
                    RETURN,
                ],
            ),
            MenuId::Ignore => (
                ".gitignore management",
                vec![
                    run("View .gitignore", ViewIgnore),
                    run("Add entries to .gitignore", AddIgnore),
                    run("Remove entry from .gitignore", RemoveIgnore),
                    RETURN,
                ],
            ),
        };
        Self { id, title, entries }
    }
}
