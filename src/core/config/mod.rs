//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITMENU_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitmenu/config.toml`
//! 3. `~/.gitmenu/config.toml`
//!
//! # Repo Config Location
//!
//! `<git-dir>/gitmenu/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitmenu::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! let settings = result.config.settings();
//! println!("Remote: {}", settings.remote);
//! ```

pub mod schema;

pub use schema::{ConfigFile, DisplayConfig, DisplayFile, Settings};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Configuration from all file scopes.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: ConfigFile,
    /// Repository configuration (if in a repo and the file exists)
    pub repo: Option<ConfigFile>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// `git_dir` is the repository's git directory, when there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be read, parsed or
    /// validated. Missing config files are not an error.
    pub fn load(git_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();
        let global = Self::global_candidates()
            .into_iter()
            .find(|candidate| candidate.exists());
        if let Ok(explicit) = std::env::var("GITMENU_CONFIG") {
            let explicit = PathBuf::from(explicit);
            if !explicit.exists() {
                warnings.push(ConfigWarning {
                    message: "GITMENU_CONFIG points to a missing file; ignoring it".into(),
                    path: explicit,
                });
            }
        }
        let repo = git_dir.map(Self::repo_config_path).filter(|p| p.exists());

        let config = Self::load_from(global.as_deref(), repo.as_deref())?;
        Ok(ConfigLoadResult { config, warnings })
    }

    /// Load configuration from explicit file paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be read, parsed or validated.
    pub fn load_from(global: Option<&Path>, repo: Option<&Path>) -> Result<Config, ConfigError> {
        let global_file = match global {
            Some(path) => Self::read_file(path)?,
            None => ConfigFile::default(),
        };
        let repo_file = repo.map(Self::read_file).transpose()?;

        global_file.validate()?;
        if let Some(ref r) = repo_file {
            r.validate()?;
        }

        Ok(Config {
            global: global_file,
            repo: repo_file,
            global_path: global.map(Path::to_path_buf),
            repo_path: repo.map(Path::to_path_buf),
        })
    }

    /// Global config locations, highest priority first.
    fn global_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(path) = std::env::var("GITMENU_CONFIG") {
            candidates.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            candidates.push(PathBuf::from(xdg_home).join("gitmenu/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".gitmenu/config.toml"));
        }
        candidates
    }

    /// Get the path for repo config relative to a git directory.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("gitmenu/config.toml")
    }

    fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Merge defaults, global and repo scopes into effective settings.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.apply(&self.global);
        if let Some(repo) = &self.repo {
            settings.apply(repo);
        }
        settings
    }

    /// Path of the global file that was loaded, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path of the repo file that was loaded, if any.
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_files_gives_defaults() {
        let config = Config::load_from(None, None).unwrap();
        assert_eq!(config.settings(), Settings::default());
        assert!(config.global_path().is_none());
        assert!(config.repo_path().is_none());
    }

    #[test]
    fn repo_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        let repo = temp.path().join("repo.toml");
        fs::write(
            &global,
            r#"
            remote = "upstream"
            default_branch = "develop"
            [display]
            color = false
            "#,
        )
        .unwrap();
        fs::write(&repo, "remote = \"fork\"\n").unwrap();

        let config = Config::load_from(Some(&global), Some(&repo)).unwrap();
        let settings = config.settings();
        assert_eq!(settings.remote, "fork");
        assert_eq!(settings.default_branch, "develop");
        assert!(!settings.display.color);
        assert_eq!(config.repo_path(), Some(repo.as_path()));
    }

    #[test]
    fn parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        fs::write(&global, "remote = [").unwrap();

        let err = Config::load_from(Some(&global), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == &global));
    }

    #[test]
    fn invalid_value_in_repo_scope_fails() {
        let temp = TempDir::new().unwrap();
        let repo = temp.path().join("repo.toml");
        fs::write(&repo, "affirmative = \"\"\n").unwrap();

        let err = Config::load_from(None, Some(&repo)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn repo_config_path_is_under_git_dir() {
        assert_eq!(
            Config::repo_config_path(Path::new("/repo/.git")),
            PathBuf::from("/repo/.git/gitmenu/config.toml")
        );
    }
}
