//! git::runner
//!
//! The process-spawn boundary.
//!
//! A command is a program and an argument vector; no shell is involved, so
//! operator text can never be interpreted as shell syntax. The child's
//! standard output and standard error are captured separately and merged
//! into one [`CommandResult`].
//!
//! # Decoding
//!
//! Children run with `LC_ALL=C.UTF-8` and their bytes are decoded as UTF-8.
//! Invalid sequences are replaced with U+FFFD rather than failing. If the
//! output cannot be collected at all after the child started, the result is
//! marked `decode_failed` and its text carries the [`ERROR_TAG`].
//!
//! # Exit Status
//!
//! A non-zero exit is not an error at this layer. The text is surfaced as-is
//! and the exit code is available for callers that need to branch on it.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

/// Marker prefixed to footers that report a failure of the menu itself.
pub const ERROR_TAG: &str = "[ERROR]";

/// Errors from spawning a process.
///
/// Only failures to start a process are errors; everything after the child
/// started is reported through [`CommandResult`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The program does not exist or is not on `PATH`.
    #[error("'{program}' was not found; is it installed and on PATH?")]
    ToolMissing { program: String },

    /// The program exists but could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: io::Error,
    },
}

/// Output of one external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Standard output followed by standard error, trimmed.
    pub text: String,
    /// The output could not be collected.
    pub decode_failed: bool,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// Build a result from raw captured streams.
    pub fn from_streams(stdout: &[u8], stderr: &[u8], exit_code: Option<i32>) -> Self {
        let stdout = String::from_utf8_lossy(stdout);
        let stderr = String::from_utf8_lossy(stderr);
        Self {
            text: combine_output(&stdout, &stderr),
            decode_failed: false,
            exit_code,
        }
    }

    /// A result whose output could not be collected.
    pub fn decode_error(err: impl std::fmt::Display) -> Self {
        Self {
            text: format!("{ERROR_TAG} failed to decode command output: {err}"),
            decode_failed: true,
            exit_code: None,
        }
    }

    /// A successful result with the given text. Mostly useful in tests.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            decode_failed: false,
            exit_code: Some(0),
        }
    }

    /// A failed result with the given text and exit code.
    pub fn failed(text: impl Into<String>, code: i32) -> Self {
        Self {
            text: text.into(),
            decode_failed: false,
            exit_code: Some(code),
        }
    }

    /// True when the process exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0) && !self.decode_failed
    }
}

/// Merge standard output and standard error into one trimmed text.
///
/// Error text is appended only when non-empty, separated by a newline when
/// both streams have content.
pub fn combine_output(stdout: &str, stderr: &str) -> String {
    let out = stdout.trim();
    let err = stderr.trim();
    match (out.is_empty(), err.is_empty()) {
        (_, true) => out.to_string(),
        (true, false) => err.to_string(),
        (false, false) => format!("{out}\n{err}"),
    }
}

/// Something that can run one external command to completion.
///
/// Implementations block until the child terminates.
pub trait ProcessRunner {
    /// Run `program` with `args` in `cwd`.
    ///
    /// # Errors
    ///
    /// Returns `RunError` only if the process could not be started.
    fn run(&mut self, program: &str, args: &[String], cwd: &Path)
        -> Result<CommandResult, RunError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<CommandResult, RunError> {
        debug!(program, ?args, cwd = %cwd.display(), "spawning command");

        let child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .env("LC_ALL", "C.UTF-8")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    RunError::ToolMissing {
                        program: program.to_string(),
                    }
                } else {
                    RunError::Spawn {
                        program: program.to_string(),
                        source,
                    }
                }
            })?;

        let result = match child.wait_with_output() {
            Ok(output) => {
                CommandResult::from_streams(&output.stdout, &output.stderr, output.status.code())
            }
            Err(e) => CommandResult::decode_error(e),
        };
        debug!(
            program,
            exit_code = ?result.exit_code,
            bytes = result.text.len(),
            "command finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_both_streams() {
        assert_eq!(combine_output("A\n", "B\n"), "A\nB");
    }

    #[test]
    fn combine_stdout_only() {
        assert_eq!(combine_output("  A \n", ""), "A");
        assert_eq!(combine_output("A", " \n"), "A");
    }

    #[test]
    fn combine_stderr_only() {
        assert_eq!(combine_output("", "fatal: nope\n"), "fatal: nope");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let result = CommandResult::from_streams(b"caf\xe9 ok", b"", Some(0));
        assert_eq!(result.text, "caf\u{FFFD} ok");
        assert!(!result.decode_failed);
        assert!(result.success());
    }

    #[test]
    fn decode_error_is_tagged() {
        let result = CommandResult::decode_error("broken pipe");
        assert!(result.decode_failed);
        assert!(result.text.starts_with(ERROR_TAG));
        assert!(!result.success());
    }

    #[test]
    fn nonzero_exit_is_not_success() {
        assert!(!CommandResult::failed("error: pathspec", 1).success());
        assert!(!CommandResult::from_streams(b"", b"", None).success());
    }

    #[test]
    fn missing_program_is_tool_missing() {
        let err = SystemRunner
            .run(
                "gitmenu-definitely-not-a-program",
                &[],
                Path::new("."),
            )
            .unwrap_err();
        assert!(matches!(err, RunError::ToolMissing { .. }));
    }
}
