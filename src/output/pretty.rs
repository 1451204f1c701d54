use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;

use crate::tasks::Task;

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "Tasks (0 items)\n  No tasks found".to_string();
    }

    let width = tasks
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = format!("Tasks ({} items)\n", tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let id = format!("#{:<width$}", task.id);
        let deadline = deadline_colored(task, today);
        writeln!(
            output,
            "{}  {}  {}  {}",
            id.dimmed(),
            deadline,
            task.description.bold(),
            relative_label(task, today).dimmed()
        )
        .ok();
    }

    output
}

/// Format a single task as pretty output
pub fn format_task_pretty(task: &Task, today: NaiveDate) -> String {
    let mut output = format!("{}\n", task.description.bold());
    writeln!(output, "  {}: {}", "ID".dimmed(), task.id).ok();
    writeln!(
        output,
        "  {}: {} ({})",
        "Deadline".dimmed(),
        deadline_colored(task, today),
        relative_label(task, today)
    )
    .ok();
    output
}

fn deadline_colored(task: &Task, today: NaiveDate) -> colored::ColoredString {
    let text = task.deadline.format("%Y-%m-%d").to_string();
    if task.is_overdue(today) {
        text.red().bold()
    } else if task.deadline == today {
        text.yellow().bold()
    } else {
        text.yellow()
    }
}

/// "overdue by 2 days", "due today", "in 5 days"
pub fn relative_label(task: &Task, today: NaiveDate) -> String {
    match task.days_left(today) {
        0 => "due today".to_string(),
        1 => "due tomorrow".to_string(),
        -1 => "overdue by 1 day".to_string(),
        n if n < 0 => format!("overdue by {} days", -n),
        n => format!("in {n} days"),
    }
}
