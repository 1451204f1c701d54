//! Path resolution for todolist configuration and data files.
//!
//! Everything lives under `~/.todolist/` unless `TODOLIST_HOME` points
//! somewhere else:
//! - `config.yaml` - Main configuration file
//! - `data/` - Database files for the local backend

use std::path::{Path, PathBuf};

use crate::error::TodoError;

/// Environment variable that overrides the root directory.
pub const HOME_ENV: &str = "TODOLIST_HOME";

/// Paths to todolist configuration and data directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.todolist/`
    pub root: PathBuf,
    /// Config file: `~/.todolist/config.yaml`
    pub config_file: PathBuf,
    /// Data directory: `~/.todolist/data/`
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths from `TODOLIST_HOME`, falling back to `$HOME/.todolist`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, TodoError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = home_dir()?;
        Ok(Self::with_root(home.join(".todolist")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_dir: root.join("data"),
            root,
        }
    }
}

/// Create `dir` and its parents if missing.
///
/// # Errors
///
/// Returns `TodoError::Config` if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), TodoError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| {
            TodoError::Config(format!("Failed to create directory {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}

/// Expand a leading `~` against the user's home directory.
///
/// # Errors
///
/// Returns an error if the path starts with `~` and `HOME` is unset.
pub fn expand_tilde(raw: &str) -> Result<PathBuf, TodoError> {
    if raw == "~" {
        return home_dir();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(raw)),
    }
}

fn home_dir() -> Result<PathBuf, TodoError> {
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| TodoError::Config("Could not determine home directory".to_string()))
}
