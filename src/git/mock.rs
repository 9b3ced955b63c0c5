//! git::mock
//!
//! Scripted process runner for tests.
//!
//! `MockRunner` never spawns anything. Each invocation is recorded and
//! answered by a responder closure. The runner is a cheap handle over shared
//! state, so a test can keep a clone for assertions after moving the original
//! into a [`Git`](super::Git).
//!
//! # Example
//!
//! ```
//! use gitmenu::git::mock::MockRunner;
//! use gitmenu::git::{CommandResult, Git};
//!
//! let runner = MockRunner::with_responder(|args| match args.first().map(String::as_str) {
//!     Some("status") => CommandResult::ok("clean"),
//!     _ => CommandResult::ok(""),
//! });
//! let mut git = Git::new(Box::new(runner.clone()), "git", ".");
//! assert_eq!(git.run(&["status"]).unwrap().text, "clean");
//! assert_eq!(runner.calls(), vec![vec!["status".to_string()]]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use super::runner::{CommandResult, ProcessRunner, RunError};

type Responder = Box<dyn FnMut(&[String]) -> CommandResult>;

struct MockState {
    responder: Responder,
    calls: Vec<Vec<String>>,
    missing: bool,
}

/// A process runner that answers from a closure and records calls.
#[derive(Clone)]
pub struct MockRunner {
    state: Rc<RefCell<MockState>>,
}

impl fmt::Debug for MockRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockRunner")
            .field("calls", &self.state.borrow().calls.len())
            .finish()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRunner {
    /// A runner that answers every command with empty successful output.
    pub fn new() -> Self {
        Self::with_responder(|_| CommandResult::ok(""))
    }

    /// A runner that answers with `responder(args)`.
    pub fn with_responder(responder: impl FnMut(&[String]) -> CommandResult + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                responder: Box::new(responder),
                calls: Vec::new(),
                missing: false,
            })),
        }
    }

    /// A runner whose program does not exist.
    pub fn missing_program() -> Self {
        let runner = Self::new();
        runner.state.borrow_mut().missing = true;
        runner
    }

    /// Argument vectors of every invocation so far, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.state.borrow().calls.clone()
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    /// Invocations whose first argument is `subcommand`.
    pub fn calls_to(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some(subcommand))
            .cloned()
            .collect()
    }
}

impl ProcessRunner for MockRunner {
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        _cwd: &Path,
    ) -> Result<CommandResult, RunError> {
        let mut state = self.state.borrow_mut();
        if state.missing {
            return Err(RunError::ToolMissing {
                program: program.to_string(),
            });
        }
        state.calls.push(args.to_vec());
        Ok((state.responder)(args))
    }
}
