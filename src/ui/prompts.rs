//! ui::prompts
//!
//! Free-text parameter prompts.
//!
//! # Design
//!
//! An empty answer to a prompt without a default means "go back": the
//! caller must not run anything and the menu is re-rendered with the footer
//! it already had. That is an ordinary outcome, not an error, so it is
//! reported as [`Answer::Aborted`].

use super::input::{InputError, InputSource};

/// How a list answer is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Split on one character, e.g. `,`.
    Char(char),
    /// Split on runs of whitespace.
    Whitespace,
}

/// Outcome of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Empty answer with no default.
    Aborted,
    /// A single trimmed value.
    Text(String),
    /// A split answer: trimmed, empty parts dropped, order kept.
    List(Vec<String>),
}

/// One prompt definition.
///
/// # Example
///
/// ```
/// use gitmenu::ui::input::ScriptedInput;
/// use gitmenu::ui::prompts::{Answer, Delimiter, Prompt};
///
/// let mut input = ScriptedInput::new().line(" a.txt, ,b.txt ");
/// let answer = Prompt::new("Files: ").split_on(Delimiter::Char(',')).ask(&mut input).unwrap();
/// assert_eq!(answer, Answer::List(vec!["a.txt".into(), "b.txt".into()]));
/// ```
#[derive(Debug, Clone)]
pub struct Prompt<'a> {
    text: &'a str,
    default: Option<&'a str>,
    split_on: Option<Delimiter>,
}

impl<'a> Prompt<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            default: None,
            split_on: None,
        }
    }

    /// Value used when the answer is empty.
    pub fn with_default(mut self, value: &'a str) -> Self {
        self.default = Some(value);
        self
    }

    /// Split the answer into a list.
    pub fn split_on(mut self, delimiter: Delimiter) -> Self {
        self.split_on = Some(delimiter);
        self
    }

    /// Read one line and interpret it.
    ///
    /// A split answer with no non-empty parts is treated like an empty one.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the input source fails.
    pub fn ask(&self, input: &mut dyn InputSource) -> Result<Answer, InputError> {
        let line = input.read_line(self.text)?;
        let trimmed = line.trim();
        let value = match (trimmed.is_empty(), self.default) {
            (false, _) => trimmed,
            (true, Some(default)) => default,
            (true, None) => return Ok(Answer::Aborted),
        };

        Ok(match self.split_on {
            None => Answer::Text(value.to_string()),
            Some(delimiter) => {
                let parts = split(value, delimiter);
                if parts.is_empty() {
                    Answer::Aborted
                } else {
                    Answer::List(parts)
                }
            }
        })
    }

    /// Ask for a single value; `None` means aborted.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the input source fails.
    pub fn ask_text(&self, input: &mut dyn InputSource) -> Result<Option<String>, InputError> {
        Ok(match self.ask(input)? {
            Answer::Aborted => None,
            Answer::Text(text) => Some(text),
            Answer::List(parts) => Some(parts.join(" ")),
        })
    }

    /// Ask for a list of values; `None` means aborted.
    ///
    /// Without a delimiter the whole answer is a one-element list.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the input source fails.
    pub fn ask_list(&self, input: &mut dyn InputSource) -> Result<Option<Vec<String>>, InputError> {
        Ok(match self.ask(input)? {
            Answer::Aborted => None,
            Answer::Text(text) => Some(vec![text]),
            Answer::List(parts) => Some(parts),
        })
    }
}

fn split(value: &str, delimiter: Delimiter) -> Vec<String> {
    let parts: Vec<&str> = match delimiter {
        Delimiter::Char(c) => value.split(c).collect(),
        Delimiter::Whitespace => value.split_whitespace().collect(),
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
