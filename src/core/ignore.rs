//! core::ignore
//!
//! Line-oriented editing of the repository's ignore file.
//!
//! The file is plain text, one pattern per line. Entries are appended at the
//! end and removed by exact match of the trimmed line; no pattern semantics
//! are interpreted here.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Handle to an ignore file at a fixed path.
#[derive(Debug, Clone)]
pub struct IgnoreFile {
    path: PathBuf,
}

/// Result of a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The file does not exist.
    Missing,
    /// The file exists; this many matching lines were dropped.
    Removed(usize),
}

impl IgnoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file, or `None` if it does not exist.
    pub fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Append one line per entry, creating the file if needed.
    ///
    /// A missing trailing newline in the existing file is repaired first so the
    /// new entries start on their own line.
    pub fn append<S: AsRef<str>>(&self, entries: &[S]) -> io::Result<()> {
        let needs_newline = match fs::read(&self.path) {
            Ok(bytes) => !bytes.is_empty() && !bytes.ends_with(b"\n"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(e),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_newline {
            file.write_all(b"\n")?;
        }
        for entry in entries {
            writeln!(file, "{}", entry.as_ref())?;
        }
        Ok(())
    }

    /// Drop every line whose trimmed text equals `entry`.
    pub fn remove(&self, entry: &str) -> io::Result<RemoveOutcome> {
        let Some(contents) = self.read()? else {
            return Ok(RemoveOutcome::Missing);
        };

        let mut kept = String::with_capacity(contents.len());
        let mut removed = 0;
        for line in contents.split_inclusive('\n') {
            if line.trim() == entry {
                removed += 1;
            } else {
                kept.push_str(line);
            }
        }
        if removed > 0 {
            fs::write(&self.path, kept)?;
        }
        Ok(RemoveOutcome::Removed(removed))
    }
}
