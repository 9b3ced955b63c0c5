//! core::types
//!
//! Validated arguments for the commands the menu builds.
//!
//! # Types
//!
//! - [`BranchName`] - Git branch name
//! - [`RemoteName`] - Git remote name
//! - [`Revision`] - Commit-ish or range expression (`HEAD~1`, `main..topic`)
//!
//! # Validation
//!
//! Every value typed at a prompt is validated before it reaches the process
//! runner. Arguments are passed as an argument vector, never through a shell,
//! so the remaining risk is a value that git would parse as an option. All
//! three types reject a leading `-`.
//!
//! # Examples
//!
//! ```
//! use gitmenu::core::types::{BranchName, Revision};
//!
//! assert!(BranchName::new("feature/menu").is_ok());
//! assert!(BranchName::new("--force").is_err());
//! assert!(Revision::new("main..topic").is_ok());
//! assert!(Revision::new("a b").is_err());
//! ```

use thiserror::Error;

/// Errors from argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid remote name: {0}")]
    InvalidRemoteName(String),

    #[error("invalid revision: {0}")]
    InvalidRevision(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Check a name against Git's refname rules (see `git check-ref-format`).
///
/// Returns a human-readable reason on failure.
fn check_ref_format(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".into());
    }
    if name == "@" {
        return Err("name cannot be '@' (reserved)".into());
    }
    if name.starts_with('.') {
        return Err("name cannot start with '.'".into());
    }
    if name.starts_with('-') {
        return Err("name cannot start with '-'".into());
    }
    if name.ends_with(".lock") {
        return Err("name cannot end with '.lock'".into());
    }
    if name.ends_with('/') {
        return Err("name cannot end with '/'".into());
    }
    for seq in ["..", "@{", "//"] {
        if name.contains(seq) {
            return Err(format!("name cannot contain '{seq}'"));
        }
    }

    const INVALID_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];
    for c in INVALID_CHARS {
        if name.contains(c) {
            return Err(format!("name cannot contain '{c}'"));
        }
    }
    if name.chars().any(|c| c.is_ascii_control()) {
        return Err("name cannot contain control characters".into());
    }

    for component in name.split('/').filter(|c| !c.is_empty()) {
        if component.starts_with('.') {
            return Err("path component cannot start with '.'".into());
        }
        if component.ends_with(".lock") {
            return Err("path component cannot end with '.lock'".into());
        }
    }

    Ok(())
}

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// A validated Git branch name.
///
/// # Example
///
/// ```
/// use gitmenu::core::types::BranchName;
///
/// let name = BranchName::new("user@feature").unwrap();
/// assert_eq!(name.as_str(), "user@feature");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("branch.lock").is_err());
/// assert!(BranchName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        check_ref_format(&name).map_err(TypeError::InvalidBranchName)?;
        Ok(Self(name))
    }
}

string_newtype!(BranchName);

/// A validated remote name.
///
/// Remote names follow the same rules as branch names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteName(String);

impl RemoteName {
    /// Create a new validated remote name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRemoteName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        check_ref_format(&name).map_err(TypeError::InvalidRemoteName)?;
        Ok(Self(name))
    }
}

string_newtype!(RemoteName);

/// A revision expression: a hash, a ref, `HEAD~2`, or a range like `a..b`.
///
/// Git resolves the expression itself; this type only guarantees it is a
/// single argument that cannot be mistaken for an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Create a new revision expression.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRevision` if the value is empty, starts with
    /// `-`, or contains whitespace or control characters.
    pub fn new(rev: impl Into<String>) -> Result<Self, TypeError> {
        let rev = rev.into();
        if rev.is_empty() {
            return Err(TypeError::InvalidRevision("revision cannot be empty".into()));
        }
        if rev.starts_with('-') {
            return Err(TypeError::InvalidRevision(format!(
                "'{rev}' cannot start with '-'"
            )));
        }
        if rev.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidRevision(format!(
                "'{rev}' cannot contain whitespace"
            )));
        }
        Ok(Self(rev))
    }

    /// Build the `a..b` range between two revisions.
    pub fn range(from: &Revision, to: &Revision) -> Revision {
        Self(format!("{}..{}", from.0, to.0))
    }
}

string_newtype!(Revision);

impl From<&BranchName> for Revision {
    fn from(branch: &BranchName) -> Self {
        Self(branch.0.clone())
    }
}

/// Validate a remote URL typed by the operator.
///
/// # Errors
///
/// Returns `TypeError::InvalidUrl` for empty values, values with whitespace,
/// or values starting with `-`.
pub fn validate_url(url: &str) -> Result<&str, TypeError> {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return Err(TypeError::InvalidUrl(format!("'{url}' is not a single url")));
    }
    if url.starts_with('-') {
        return Err(TypeError::InvalidUrl(format!(
            "'{url}' cannot start with '-'"
        )));
    }
    Ok(url)
}
