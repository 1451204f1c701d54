//! Error types for todolist.

use thiserror::Error;

/// Errors produced by the task store, configuration, and CLI.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Required connection configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backing schema could not be created or upgraded.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A single store operation failed and did not take effect.
    #[error("Query failed: {0}")]
    Query(String),

    /// The backend stayed busy past the configured timeout.
    #[error("Query timed out: {0}")]
    Timeout(String),

    /// Input rejected before it reached the backend.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TodoError {
    /// Whether the session cannot continue after this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Schema(_))
    }

    /// Whether this is a failed store operation (including timeouts).
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_) | Self::Timeout(_))
    }

    /// Process exit code for the CLI.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Schema(_) => 2,
            Self::Validation(_) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_kinds() {
        assert!(TodoError::Config("missing password".into()).is_fatal());
        assert!(TodoError::Schema("disk full".into()).is_fatal());
        assert!(!TodoError::Query("locked".into()).is_fatal());
        assert!(!TodoError::Validation("empty".into()).is_fatal());
    }

    #[test]
    fn test_timeout_is_query() {
        assert!(TodoError::Timeout("busy".into()).is_query());
        assert!(TodoError::Query("x".into()).is_query());
        assert!(!TodoError::Schema("x".into()).is_query());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TodoError::Config(String::new()).exit_code(), 2);
        assert_eq!(TodoError::Schema(String::new()).exit_code(), 2);
        assert_eq!(TodoError::Validation(String::new()).exit_code(), 3);
        assert_eq!(TodoError::Query(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_display() {
        let err = TodoError::Validation("Task description cannot be empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: Task description cannot be empty"
        );
    }
}
