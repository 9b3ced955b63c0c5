//! engine
//!
//! Turns committed menu choices into work.
//!
//! # Architecture
//!
//! ```text
//! Session -> MenuController -> index -> catalog binding
//!         -> Dispatcher -> handler -> (Prompt ->) ConfirmationGate -> Git
//!         -> footer -> next render
//! ```
//!
//! - [`session`] - The menu stack and the top-level loop
//! - [`catalog`] - Menus and the binding of each entry to an action
//! - [`dispatch`] - Table from action identifiers to handlers
//! - [`gate`] - Confirmation before destructive actions
//! - [`actions`] - The handlers, grouped by menu
//!
//! # Invariants
//!
//! - Handlers run synchronously to completion; at most one git process runs
//!   at a time.
//! - Validation failures, cancellations and git's own failures come back as
//!   footers. Only a process that cannot be started or broken input escapes as
//!   [`SessionError`].
//! - An aborted prompt runs nothing and leaves the footer as it was.

/// Unwrap a prompt answer or return [`Outcome::Aborted`].
macro_rules! or_abort {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok($crate::engine::Outcome::Aborted),
        }
    };
}

/// Unwrap a validated value or return an invalid-input footer.
macro_rules! or_invalid {
    ($value:expr) => {
        match $value {
            Ok(value) => value,
            Err(e) => return Ok($crate::engine::Outcome::invalid(e)),
        }
    };
}

pub(crate) use or_abort;
pub(crate) use or_invalid;

pub mod actions;
pub mod catalog;
pub mod dispatch;
pub mod gate;
pub mod session;

pub use catalog::{ActionId, Binding, MenuId, MenuSpec};
pub use dispatch::Dispatcher;
pub use gate::{ConfirmationGate, ConfirmationOutcome, CANCELLED};
pub use session::{Session, SessionSummary};

use std::fmt::Display;
use std::io::{self, Write};

use thiserror::Error;

use crate::core::config::Settings;
use crate::git::{Git, RunError};
use crate::ui::input::{InputError, InputSource};
use crate::ui::menu::EmptyMenu;
use crate::ui::prompts::{Delimiter, Prompt};

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to draw the menu: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Menu(#[from] EmptyMenu),
}

/// What an action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Replace the footer with this text.
    Footer(String),
    /// The operator backed out; keep the current footer.
    Aborted,
}

impl Outcome {
    pub fn footer(text: impl Into<String>) -> Self {
        Outcome::Footer(text.into())
    }

    /// Footer for input rejected before anything ran.
    pub fn invalid(reason: impl Display) -> Self {
        Outcome::Footer(format!("Invalid input: {reason}"))
    }
}

/// Result type of every action handler.
pub type ActionResult = Result<Outcome, SessionError>;

/// Everything a handler may touch.
pub struct ActionContext<'a> {
    pub git: &'a mut Git,
    pub input: &'a mut dyn InputSource,
    /// Where listings shown before a prompt are written.
    pub out: &'a mut dyn Write,
    pub settings: &'a Settings,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        git: &'a mut Git,
        input: &'a mut dyn InputSource,
        out: &'a mut dyn Write,
        settings: &'a Settings,
    ) -> Self {
        Self {
            git,
            input,
            out,
            settings,
        }
    }

    /// Ask for one value; `None` means the operator backed out.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        Prompt::new(prompt).ask_text(&mut *self.input)
    }

    /// Ask for one value, using `default` for an empty answer.
    pub fn ask_or(&mut self, prompt: &str, default: &str) -> Result<Option<String>, InputError> {
        Prompt::new(prompt)
            .with_default(default)
            .ask_text(&mut *self.input)
    }

    /// Ask for a delimited list; `None` means the operator backed out.
    pub fn ask_list(
        &mut self,
        prompt: &str,
        delimiter: Delimiter,
    ) -> Result<Option<Vec<String>>, InputError> {
        Prompt::new(prompt)
            .split_on(delimiter)
            .ask_list(&mut *self.input)
    }

    /// Run git and keep its text.
    pub fn git<S: AsRef<str>>(&mut self, args: &[S]) -> Result<String, RunError> {
        self.git.text(args)
    }

    /// Run `action` only if the operator types the affirmative token.
    pub fn confirm(
        &mut self,
        prompt: &str,
        action: impl FnOnce(&mut Git) -> Result<String, SessionError>,
    ) -> ActionResult {
        let gate = ConfirmationGate::new(&self.settings.affirmative);
        let git = &mut *self.git;
        let outcome = gate.confirm(&mut *self.input, prompt, || action(git))?;
        Ok(Outcome::Footer(outcome.footer))
    }

    /// Write text shown before the next prompt.
    pub fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Current local time in the configured commit timestamp format.
    pub fn timestamp(&self) -> String {
        chrono::Local::now()
            .format(&self.settings.timestamp_format)
            .to_string()
    }
}
