//! Add command implementation.

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{join_words, AddArgs, OutputFormat};
use crate::core::{normalize_description, parse_deadline};
use crate::error::TodoError;
use crate::output::relative_label;
use crate::storage::TaskStore;
use crate::tasks::Task;

/// Execute the add command.
///
/// The description is trimmed and checked, and the deadline parsed, before
/// the store is touched. A missing deadline means today.
///
/// # Errors
///
/// Returns `TodoError::Validation` for bad input or `TodoError::Query` if
/// the insert fails.
pub fn add(
    store: &TaskStore,
    args: &AddArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let description = normalize_description(&join_words(&args.description))?;
    let deadline = match &args.deadline {
        Some(raw) => parse_deadline(raw)?,
        None => today,
    };

    let id = store.create(&description, deadline)?;
    let task = Task {
        id,
        description,
        deadline,
    };

    match format {
        OutputFormat::Json => {
            let output = json!({
                "created": true,
                "id": task.id,
                "description": task.description,
                "deadline": task.deadline,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        },
        OutputFormat::Pretty => Ok(format!(
            "{} {} (ID: {})\n  {} {} ({})",
            "Added:".green().bold(),
            task.description,
            task.id.to_string().dimmed(),
            "Deadline:".cyan(),
            task.deadline,
            relative_label(&task, today)
        )),
    }
}
