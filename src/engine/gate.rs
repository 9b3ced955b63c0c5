//! engine::gate
//!
//! Confirmation before destructive actions.
//!
//! Every action that rewrites history or discards state runs behind a
//! [`ConfirmationGate`]. The wrapped action runs only when the operator types
//! the affirmative token (compared case-insensitively after trimming);
//! any other answer, including an empty one, cancels without side effects.

use tracing::info;

use crate::ui::input::{InputError, InputSource};

/// Footer shown when a gated action is declined.
pub const CANCELLED: &str = "Operation cancelled.";

/// Result of one confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationOutcome {
    /// The action ran.
    pub proceeded: bool,
    /// The action's text, or [`CANCELLED`].
    pub footer: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfirmationGate<'a> {
    affirmative: &'a str,
}

impl<'a> ConfirmationGate<'a> {
    /// A gate that requires `affirmative` (expected lowercase).
    pub fn new(affirmative: &'a str) -> Self {
        Self { affirmative }
    }

    /// The full prompt text shown for `question`.
    pub fn prompt_text(&self, question: &str) -> String {
        format!("{question} ({}/no): ", self.affirmative)
    }

    /// Ask `question`; run `action` exactly once if confirmed.
    ///
    /// # Errors
    ///
    /// Returns the input error, or whatever `action` returns.
    pub fn confirm<E>(
        &self,
        input: &mut dyn InputSource,
        question: &str,
        action: impl FnOnce() -> Result<String, E>,
    ) -> Result<ConfirmationOutcome, E>
    where
        E: From<InputError>,
    {
        let answer = input.read_line(&self.prompt_text(question))?;
        if answer.trim().to_lowercase() == self.affirmative.to_lowercase() {
            info!(question, "confirmed");
            Ok(ConfirmationOutcome {
                proceeded: true,
                footer: action()?,
            })
        } else {
            info!(question, "declined");
            Ok(ConfirmationOutcome {
                proceeded: false,
                footer: CANCELLED.to_string(),
            })
        }
    }
}
