//! Command implementations for todolist.
//!
//! Each command makes one store call and returns the text to print.
//! Misses on update and delete are reported in the output, not as errors.

mod add;
mod completions;
mod config;

pub use add::add;
pub use completions::{completion_install_instructions, completions, generate_completions};
pub use config::config;

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::cli::args::{join_words, OutputFormat, UpdateArgs};
use crate::core::{normalize_description, parse_deadline};
use crate::error::TodoError;
use crate::output::{format_task, format_tasks, to_json};
use crate::storage::TaskStore;
use crate::tasks::TaskId;

/// Execute init command
///
/// # Errors
///
/// Returns an error if the schema version cannot be read.
pub fn init(store: &TaskStore, format: OutputFormat) -> Result<String, TodoError> {
    store.ensure_schema()?;
    let version = store.database().schema_version()?;
    let location = store
        .database()
        .path()
        .map_or_else(|| ":memory:".to_string(), |p| p.display().to_string());

    match format {
        OutputFormat::Json => to_json(&json!({
            "database": location,
            "schema_version": version,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {location} (schema v{version})",
            "Ready:".green().bold()
        )),
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the store query fails or output formatting fails.
pub fn list(store: &TaskStore, today: NaiveDate, format: OutputFormat) -> Result<String, TodoError> {
    let tasks = store.list()?;
    format_tasks(&tasks, today, format)
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if the store query fails or output formatting fails.
pub fn show(
    store: &TaskStore,
    id: TaskId,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match store.get(id)? {
        Some(task) => format_task(&task, today, format),
        None => match format {
            OutputFormat::Json => to_json(&json!({ "id": id, "found": false })),
            OutputFormat::Pretty => Ok(format!("No task with ID {id}")),
        },
    }
}

/// Execute update command
///
/// Without a new deadline the current one is kept; if the task is gone by
/// then the update is a no-op like any other miss.
///
/// # Errors
///
/// Returns `TodoError::Validation` for bad input or `TodoError::Query` if
/// the update fails.
pub fn update(
    store: &TaskStore,
    args: &UpdateArgs,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let description = normalize_description(&join_words(&args.description))?;
    let deadline = match &args.deadline {
        Some(raw) => Some(parse_deadline(raw)?),
        None => store.get(args.id)?.map(|task| task.deadline),
    };

    let outcome = match deadline {
        Some(deadline) => store.update(args.id, &description, deadline)?,
        None => Default::default(),
    };

    write_result(args.id, "updated", outcome.applied(), format)
}

/// Execute delete command
///
/// # Errors
///
/// Returns `TodoError::Query` if the delete fails.
pub fn delete(store: &TaskStore, id: TaskId, format: OutputFormat) -> Result<String, TodoError> {
    let outcome = store.delete_one(id)?;
    write_result(id, "deleted", outcome.applied(), format)
}

/// Execute clear command
///
/// Deletes nothing unless `yes` is set or the prompt is answered with `y`.
///
/// # Errors
///
/// Returns an error if the prompt cannot be read or the delete fails.
pub fn clear<R: BufRead, W: Write>(
    store: &TaskStore,
    yes: bool,
    input: &mut R,
    prompt: &mut W,
    format: OutputFormat,
) -> Result<String, TodoError> {
    if !yes && !confirm("Delete ALL tasks? This cannot be undone. [y/N] ", input, prompt)? {
        return match format {
            OutputFormat::Json => to_json(&json!({ "deleted": 0, "aborted": true })),
            OutputFormat::Pretty => Ok("Aborted; no tasks deleted".to_string()),
        };
    }

    let outcome = store.delete_all()?;
    info!(deleted = outcome.affected, "Cleared all tasks");

    match format {
        OutputFormat::Json => to_json(&json!({ "deleted": outcome.affected, "aborted": false })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} task(s)",
            "Deleted".red().bold(),
            outcome.affected
        )),
    }
}

fn confirm<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    prompt: &mut W,
) -> Result<bool, TodoError> {
    write!(prompt, "{question}")?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn write_result(
    id: TaskId,
    verb: &str,
    applied: bool,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Json => to_json(&json!({ "id": id, verb: applied })),
        OutputFormat::Pretty if applied => {
            let mut capitalized = verb.to_string();
            capitalized[..1].make_ascii_uppercase();
            Ok(format!("{} task {id}", capitalized.green().bold()))
        },
        OutputFormat::Pretty => Ok(format!("No task with ID {id} (nothing changed)")),
    }
}
