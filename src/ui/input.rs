//! ui::input
//!
//! The operator input capability.
//!
//! Two kinds of input exist: single navigation keys for the menu and whole
//! lines for prompts. [`TerminalInput`] reads them from the real terminal;
//! [`ScriptedInput`] replays a fixed script so the session can be driven in
//! tests.
//!
//! Both reads block until input arrives.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use thiserror::Error;

/// Errors from reading operator input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("terminal input error: {0}")]
    Io(#[from] io::Error),

    /// A scripted input ran out of events.
    #[error("input script exhausted while waiting for {0}")]
    Exhausted(&'static str),
}

/// A navigation key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    /// Anything else; the menu ignores it.
    Other,
}

/// Source of operator input.
pub trait InputSource {
    /// Block for one key event.
    fn read_key(&mut self) -> Result<Key, InputError>;

    /// Show `prompt` and block for one line of text, without its line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;
}

/// Input from the process's terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

/// Leaves raw mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Confirm,
        _ => Key::Other,
    }
}

impl InputSource for TerminalInput {
    fn read_key(&mut self) -> Result<Key, InputError> {
        let _raw = RawModeGuard::enable()?;
        loop {
            // Release and repeat events are reported on some platforms.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key.code));
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        // End of input reads as an empty line.
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scripted {
    Key(Key),
    Line(String),
}

/// Replays a fixed sequence of keys and lines.
///
/// Keys and lines share one queue, so the script reads in the order the
/// operator would type. Reading a key when the next event is a line (or the
/// other way round) skips nothing: the mismatched event is still consumed,
/// as the wrong kind of input, which is how a misordered test script shows
/// itself.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<Scripted>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue key presses.
    pub fn keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.events.extend(keys.into_iter().map(Scripted::Key));
        self
    }

    /// Queue one line of text.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.events.push_back(Scripted::Line(text.into()));
        self
    }

    /// Queue `Down` `n` times then `Confirm`: select item `n` from the top.
    pub fn select(self, n: usize) -> Self {
        self.keys(std::iter::repeat(Key::Down).take(n).chain([Key::Confirm]))
    }

    /// Every prompt text shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_key(&mut self) -> Result<Key, InputError> {
        match self.events.pop_front() {
            Some(Scripted::Key(key)) => Ok(key),
            Some(Scripted::Line(_)) => Ok(Key::Other),
            None => Err(InputError::Exhausted("a key")),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        match self.events.pop_front() {
            Some(Scripted::Line(line)) => Ok(line),
            Some(Scripted::Key(_)) => Ok(String::new()),
            None => Err(InputError::Exhausted("a line")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arrows_and_enter_are_recognized() {
        assert_eq!(map_key(KeyCode::Up), Key::Up);
        assert_eq!(map_key(KeyCode::Down), Key::Down);
        assert_eq!(map_key(KeyCode::Enter), Key::Confirm);
        assert_eq!(map_key(KeyCode::Char('j')), Key::Other);
        assert_eq!(map_key(KeyCode::Esc), Key::Other);
        assert_eq!(map_key(KeyCode::Left), Key::Other);
    }

    #[test]
    fn script_replays_in_order() {
        let mut input = ScriptedInput::new().select(2).line("hello");
        assert_eq!(input.read_key().unwrap(), Key::Down);
        assert_eq!(input.read_key().unwrap(), Key::Down);
        assert_eq!(input.read_key().unwrap(), Key::Confirm);
        assert_eq!(input.read_line("Say: ").unwrap(), "hello");
        assert_eq!(input.prompts(), ["Say: ".to_string()]);
        assert!(matches!(input.read_key(), Err(InputError::Exhausted(_))));
    }

    #[test]
    fn mismatched_events_are_consumed() {
        let mut input = ScriptedInput::new().line("text").keys([Key::Up]);
        assert_eq!(input.read_key().unwrap(), Key::Other);
        assert_eq!(input.read_line("> ").unwrap(), "");
        assert_eq!(input.remaining(), 0);
    }
}
