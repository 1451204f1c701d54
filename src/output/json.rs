//! JSON output formatting for todolist.

use serde::Serialize;
use serde_json::json;

use crate::error::TodoError;
use crate::tasks::Task;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, TodoError> {
    let output = json!({
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
