//! `SQLite` database connection and error mapping.
//!
//! The database file lives wherever the connection settings resolve it,
//! `~/.todolist/data/<database>.db` by default. Every connection gets a
//! busy timeout so a locked file surfaces as `TodoError::Timeout` rather
//! than blocking forever.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, ErrorCode};
use tracing::{debug, info_span, warn};

use crate::config::{ensure_dir, ConnectionSettings};
use crate::error::TodoError;

use super::migrations;

/// Busy timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open the database described by resolved connection settings.
    ///
    /// Creates the containing directory if needed. Does not touch the schema.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the directory cannot be created or the
    /// backend cannot be opened.
    pub fn open(settings: &ConnectionSettings) -> Result<Self, TodoError> {
        let span = info_span!("connect", user = %settings.user, database = %settings.database);
        let _guard = span.enter();

        if let Some(dir) = settings.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(dir).map_err(|e| match e {
                TodoError::Config(msg) => TodoError::Schema(msg),
                other => other,
            })?;
        }
        Self::open_at(&settings.path, settings.timeout)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the file cannot be opened.
    pub fn open_at(path: &Path, timeout: Duration) -> Result<Self, TodoError> {
        let conn = Connection::open(path).map_err(|e| {
            TodoError::Schema(format!("Failed to open database {}: {e}", path.display()))
        })?;
        configure(&conn, timeout)?;

        debug!(path = %path.display(), "Opened database");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if the database cannot be opened.
    pub fn open_in_memory() -> Result<Self, TodoError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TodoError::Schema(format!("Failed to open in-memory database: {e}"))
        })?;
        configure(&conn, DEFAULT_TIMEOUT)?;

        Ok(Self { conn, path: None })
    }

    /// Create or upgrade the schema. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Schema` if a migration fails.
    pub fn migrate(&self) -> Result<(), TodoError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, TodoError> {
        migrations::get_version(&self.conn)
    }

    /// File backing this database, `None` when in memory.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Execute a statement that returns no rows.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Query` (or `Timeout`) if the statement fails.
    pub fn execute(
        &self,
        context: &str,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<usize, TodoError> {
        self.conn
            .execute(sql, params)
            .map_err(|e| query_error(context, &e))
    }
}

fn configure(conn: &Connection, timeout: Duration) -> Result<(), TodoError> {
    conn.busy_timeout(timeout)
        .map_err(|e| TodoError::Schema(format!("Failed to set busy timeout: {e}")))
}

/// Map a backend failure for a single operation into the error taxonomy.
///
/// Busy and locked results mean the timeout already expired.
pub(crate) fn query_error(context: &str, err: &rusqlite::Error) -> TodoError {
    warn!(error = %err, "{context} failed");

    if let rusqlite::Error::SqliteFailure(code, _) = err {
        if matches!(code.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) {
            return TodoError::Timeout(format!("{context}: {err}"));
        }
    }
    TodoError::Query(format!("{context}: {err}"))
}
