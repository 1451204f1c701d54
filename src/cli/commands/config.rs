//! Config command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::TodoError;

/// Execute config subcommands.
///
/// # Errors
///
/// `show` returns `TodoError::Config` if the connection settings are
/// incomplete.
pub fn config(
    config: &Config,
    paths: &Paths,
    cmd: &ConfigCommands,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match cmd {
        ConfigCommands::Path => match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "config_file": paths.config_file,
                "exists": paths.config_file.exists(),
            }))?),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },
        ConfigCommands::Show => {
            let settings = config.connection(paths)?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                    "host": settings.host,
                    "user": settings.user,
                    "password": settings.password.to_string(),
                    "database": settings.database,
                    "timeout_secs": settings.timeout.as_secs(),
                    "path": settings.path,
                }))?),
                OutputFormat::Pretty => {
                    let mut output = format!("{}\n", "Connection".bold());
                    output.push_str(&format!("  {}: {}\n", "Host".dimmed(), settings.host));
                    output.push_str(&format!("  {}: {}\n", "User".dimmed(), settings.user));
                    output.push_str(&format!("  {}: {}\n", "Password".dimmed(), settings.password));
                    output.push_str(&format!("  {}: {}\n", "Database".dimmed(), settings.database));
                    output.push_str(&format!(
                        "  {}: {}s\n",
                        "Timeout".dimmed(),
                        settings.timeout.as_secs()
                    ));
                    output.push_str(&format!("  {}: {}", "File".dimmed(), settings.path.display()));
                    Ok(output)
                },
            }
        },
    }
}
