//! Input checks applied before anything reaches the backend.

use chrono::{Datelike, NaiveDate};

use crate::error::TodoError;
use crate::tasks::TaskId;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Earliest and latest deadline years the store accepts.
///
/// Deadlines are stored as `YYYY-MM-DD` text and ordered as text, which only
/// matches calendar order for four-digit years.
pub const DEADLINE_YEARS: (i32, i32) = (1000, 9999);

/// Validate a task description.
///
/// # Errors
///
/// Returns `TodoError::Validation` if the description is blank or longer
/// than [`MAX_DESCRIPTION_LEN`] characters.
pub fn validate_description(description: &str) -> Result<(), TodoError> {
    if description.trim().is_empty() {
        return Err(TodoError::Validation(
            "Task description cannot be empty".to_string(),
        ));
    }

    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(TodoError::Validation(format!(
            "Task description is {len} characters; the limit is {MAX_DESCRIPTION_LEN}"
        )));
    }

    Ok(())
}

/// Validate a task id supplied by the caller.
///
/// # Errors
///
/// Returns `TodoError::Validation` if the id is not positive.
pub fn validate_id(id: TaskId) -> Result<(), TodoError> {
    if id < 1 {
        return Err(TodoError::Validation(format!(
            "Task ID must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

/// Validate a deadline date.
///
/// # Errors
///
/// Returns `TodoError::Validation` if the year is outside [`DEADLINE_YEARS`].
pub fn validate_deadline(deadline: NaiveDate) -> Result<(), TodoError> {
    let (min, max) = DEADLINE_YEARS;
    if !(min..=max).contains(&deadline.year()) {
        return Err(TodoError::Validation(format!(
            "Deadline {deadline} is out of range; the year must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Trim a description and validate what remains.
///
/// # Errors
///
/// Returns `TodoError::Validation` if the trimmed text is rejected.
pub fn normalize_description(description: &str) -> Result<String, TodoError> {
    let trimmed = description.trim();
    validate_description(trimmed)?;
    Ok(trimmed.to_string())
}
