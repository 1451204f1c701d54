//! Configuration settings for todolist.
//!
//! Settings are loaded from `~/.todolist/config.yaml`. Database connection
//! values can be overridden from the environment, which takes precedence
//! over the file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::paths::expand_tilde;
use crate::config::Paths;
use crate::error::TodoError;

pub const ENV_DB_HOST: &str = "TODOLIST_DB_HOST";
pub const ENV_DB_USER: &str = "TODOLIST_DB_USER";
pub const ENV_DB_PASSWORD: &str = "TODOLIST_DB_PASSWORD";
pub const ENV_DB_NAME: &str = "TODOLIST_DB_NAME";
pub const ENV_DB_TIMEOUT: &str = "TODOLIST_DB_TIMEOUT";

const MAX_TIMEOUT_SECS: u64 = 300;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Backend connection settings.
    pub database: DatabaseConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply to the global `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Raw connection settings as they appear in the config file.
///
/// Every field is optional here; [`DatabaseConfig::resolve`] decides whether
/// the combination is usable.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend location.
    pub host: Option<String>,
    /// Principal the session runs as.
    pub user: Option<String>,
    /// Credential. Never defaulted.
    pub password: Option<String>,
    /// Database name.
    pub database: Option<String>,
    /// Busy/query timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| Secret::MASK))
            .field("database", &self.database)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// A credential that never shows up in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    const MASK: &'static str = "********";

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", Self::MASK)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MASK)
    }
}

/// Validated connection settings, ready to open the backend.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub user: String,
    pub password: Secret,
    pub database: String,
    pub timeout: Duration,
    /// Database file the host and name resolve to.
    pub path: PathBuf,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: None,
            user: None,
            password: None,
            database: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DatabaseConfig {
    /// Overlay values from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `TODOLIST_DB_TIMEOUT` is not a number.
    pub fn with_env_overrides(self) -> Result<Self, TodoError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup (the environment in practice).
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout override is not a number.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, TodoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get(ENV_DB_HOST) {
            self.host = Some(host);
        }
        if let Some(user) = get(ENV_DB_USER) {
            self.user = Some(user);
        }
        if let Some(password) = get(ENV_DB_PASSWORD) {
            self.password = Some(password);
        }
        if let Some(database) = get(ENV_DB_NAME) {
            self.database = Some(database);
        }
        if let Some(timeout) = get(ENV_DB_TIMEOUT) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                TodoError::Config(format!(
                    "{ENV_DB_TIMEOUT} must be a whole number of seconds, got '{timeout}'"
                ))
            })?;
        }

        Ok(self)
    }

    /// Check that every required value is present and usable.
    ///
    /// `localhost` and `127.0.0.1` resolve to the local data directory; any
    /// other host is taken as a directory path.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Config` naming the first missing or invalid value.
    pub fn resolve(&self, paths: &Paths) -> Result<ConnectionSettings, TodoError> {
        let host = required(self.host.as_deref(), "host", ENV_DB_HOST)?;
        let user = required(self.user.as_deref(), "user", ENV_DB_USER)?;
        let password = required(self.password.as_deref(), "password", ENV_DB_PASSWORD)?;
        let database = required(self.database.as_deref(), "database", ENV_DB_NAME)?;

        if !database
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(TodoError::Config(format!(
                "database name '{database}' may only contain letters, digits, '_' and '-'"
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(TodoError::Config(format!(
                "timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                self.timeout_secs
            )));
        }

        let dir = match host.as_str() {
            "localhost" | "127.0.0.1" => paths.data_dir.clone(),
            other => expand_tilde(other)?,
        };

        Ok(ConnectionSettings {
            path: dir.join(format!("{database}.db")),
            host,
            user,
            password: Secret::new(password),
            database,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

fn required(value: Option<&str>, key: &str, env: &str) -> Result<String, TodoError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| {
            TodoError::Config(format!(
                "database.{key} is not set (add it to config.yaml or set {env})"
            ))
        })
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(paths: &Paths) -> Result<Self, TodoError> {
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TodoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TodoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Resolve connection settings, applying environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Config` if a required value is missing.
    pub fn connection(&self, paths: &Paths) -> Result<ConnectionSettings, TodoError> {
        self.database.clone().with_env_overrides()?.resolve(paths)
    }
}
