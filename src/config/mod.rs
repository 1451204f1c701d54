//! Configuration management for todolist.
//!
//! This module handles loading configuration from `~/.todolist/` and
//! resolving backend connection settings.

mod paths;
mod settings;

pub use paths::{ensure_dir, expand_tilde, Paths, HOME_ENV};
pub use settings::{
    ColorSetting, Config, ConnectionSettings, DatabaseConfig, GeneralConfig, Secret,
    ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_TIMEOUT, ENV_DB_USER,
};
