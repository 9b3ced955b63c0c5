//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same file schema is used for the global and the repository scope.
//! Every key is optional; unset keys fall through to the next scope and
//! finally to the built-in defaults in [`Settings::default`].
//!
//! # Example
//!
//! ```toml
//! affirmative = "yes"
//! remote = "origin"
//! default_branch = "main"
//! timestamp_format = "%Y-%m-%d %H:%M:%S"
//!
//! [display]
//! color = true
//! clear_screen = true
//! rule_width = 40
//! ```

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// One configuration file (either scope).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Collaborator program to spawn
    pub git: Option<String>,

    /// Token the confirmation gate requires
    pub affirmative: Option<String>,

    /// Remote used by pull, push and prune
    pub remote: Option<String>,

    /// Default branch offered by pull and push
    pub default_branch: Option<String>,

    /// chrono format appended to commit messages
    pub timestamp_format: Option<String>,

    /// Ignore file, relative to the work tree
    pub ignore_file: Option<PathBuf>,

    /// Tracing output file
    pub log_file: Option<PathBuf>,

    /// Rendering options
    pub display: Option<DisplayFile>,
}

/// `[display]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayFile {
    pub color: Option<bool>,
    pub clear_screen: Option<bool>,
    pub rule_width: Option<usize>,
}

impl ConfigFile {
    /// Validate the values that are set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(git) = &self.git {
            if git.trim().is_empty() {
                return Err(ConfigError::InvalidValue("git program cannot be empty".into()));
            }
        }
        if let Some(token) = &self.affirmative {
            validate_affirmative(token)?;
        }
        if let Some(format) = &self.timestamp_format {
            validate_timestamp_format(format)?;
        }
        if let Some(width) = self.display.as_ref().and_then(|d| d.rule_width) {
            if !(1..=200).contains(&width) {
                return Err(ConfigError::InvalidValue(format!(
                    "rule_width {width} out of range, must be 1..=200"
                )));
            }
        }
        Ok(())
    }
}

fn validate_affirmative(token: &str) -> Result<(), ConfigError> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue(format!(
            "affirmative token '{token}' must be a single non-empty word"
        )));
    }
    Ok(())
}

fn validate_timestamp_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidValue(format!(
            "invalid timestamp_format '{format}'"
        )));
    }
    Ok(())
}

/// Rendering options handed to the renderer.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DisplayConfig {
    pub color: bool,
    pub clear_screen: bool,
    pub rule_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            rule_width: 40,
        }
    }
}

/// Effective settings after all scopes are merged.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Settings {
    pub git: String,
    pub affirmative: String,
    pub remote: String,
    pub default_branch: String,
    pub timestamp_format: String,
    pub ignore_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub display: DisplayConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git: "git".into(),
            affirmative: "yes".into(),
            remote: "origin".into(),
            default_branch: "main".into(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".into(),
            ignore_file: PathBuf::from(".gitignore"),
            log_file: None,
            display: DisplayConfig::default(),
        }
    }
}

impl Settings {
    /// Overlay the values set in `file` onto these settings.
    pub fn apply(&mut self, file: &ConfigFile) {
        if let Some(v) = &file.git {
            self.git = v.clone();
        }
        if let Some(v) = &file.affirmative {
            self.affirmative = v.to_lowercase();
        }
        if let Some(v) = &file.remote {
            self.remote = v.clone();
        }
        if let Some(v) = &file.default_branch {
            self.default_branch = v.clone();
        }
        if let Some(v) = &file.timestamp_format {
            self.timestamp_format = v.clone();
        }
        if let Some(v) = &file.ignore_file {
            self.ignore_file = v.clone();
        }
        if let Some(v) = &file.log_file {
            self.log_file = Some(v.clone());
        }
        if let Some(display) = &file.display {
            if let Some(v) = display.color {
                self.display.color = v;
            }
            if let Some(v) = display.clear_screen {
                self.display.clear_screen = v;
            }
            if let Some(v) = display.rule_width {
                self.display.rule_width = v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            git = "/usr/bin/git"
            affirmative = "YES"
            remote = "upstream"

            [display]
            color = false
            rule_width = 60
            "#,
        )
        .unwrap();
        assert!(file.validate().is_ok());

        let mut settings = Settings::default();
        settings.apply(&file);
        assert_eq!(settings.git, "/usr/bin/git");
        assert_eq!(settings.affirmative, "yes");
        assert_eq!(settings.remote, "upstream");
        assert_eq!(settings.default_branch, "main");
        assert!(!settings.display.color);
        assert!(settings.display.clear_screen);
        assert_eq!(settings.display.rule_width, 60);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("colour = true");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_values_rejected() {
        let bad_token = ConfigFile {
            affirmative: Some("yes please".into()),
            ..Default::default()
        };
        assert!(bad_token.validate().is_err());

        let bad_width = ConfigFile {
            display: Some(DisplayFile {
                rule_width: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(bad_width.validate().is_err());

        let bad_format = ConfigFile {
            timestamp_format: Some("%Q".into()),
            ..Default::default()
        };
        assert!(bad_format.validate().is_err());

        let empty_git = ConfigFile {
            git: Some("  ".into()),
            ..Default::default()
        };
        assert!(empty_git.validate().is_err());
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.affirmative, "yes");
        assert_eq!(settings.ignore_file, PathBuf::from(".gitignore"));
        assert_eq!(settings.display.rule_width, 40);
    }
}
