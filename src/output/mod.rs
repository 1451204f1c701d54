//! Output formatting for todolist.
//!
//! This module provides formatters for displaying tasks in various formats.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, today)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, today: NaiveDate, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, today)),
        OutputFormat::Json => format_task_json(task),
    }
}
