use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::tasks::TaskId;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "A small task tracker with deadlines")]
#[command(long_about = "todolist - tasks with deadlines, stored in SQLite

Add tasks, list them by deadline, update or delete them by ID.

QUICK START:
  todolist add \"Buy milk\" -d tomorrow    Add a task
  todolist list                          Show every task, earliest deadline first
  todolist update 3 \"Buy oat milk\"       Rewrite task 3
  todolist delete 3                      Remove task 3

CONNECTION:
  Settings come from ~/.todolist/config.yaml (database.host, user, password,
  database) and can be overridden with TODOLIST_DB_HOST, TODOLIST_DB_USER,
  TODOLIST_DB_PASSWORD and TODOLIST_DB_NAME. All four are required.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to general.default_output from the config file, or 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the task table if needed and report where it lives
    ///
    /// Every command does this on startup; run it once to check that the
    /// connection settings work.
    Init,

    /// Add a new task
    ///
    /// # Examples
    ///
    ///   todolist add "Buy milk"
    ///   todolist add Call the plumber -d friday
    ///   todolist add "File taxes" --deadline 2025-04-15
    #[command(alias = "a")]
    Add(AddArgs),

    /// List every task, earliest deadline first
    ///
    /// # Examples
    ///
    ///   todolist list
    ///   todolist ls -o json
    #[command(alias = "ls")]
    List,

    /// Show a single task
    Show {
        /// Task ID
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: TaskId,
    },

    /// Rewrite a task's description and deadline
    ///
    /// Without --deadline the current deadline is kept. Updating an ID that
    /// does not exist changes nothing.
    ///
    /// # Examples
    ///
    ///   todolist update 3 "Buy oat milk"
    ///   todolist update 3 "Buy oat milk" -d "in 2 days"
    Update(UpdateArgs),

    /// Delete a task by ID
    ///
    /// Deleting an ID that does not exist changes nothing.
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: TaskId,
    },

    /// Delete ALL tasks
    ///
    /// Asks for confirmation unless --yes is given. This cannot be undone.
    /// IDs keep counting from where they were.
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: todolist completions bash > ~/.bash_completion.d/todolist
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead of the script
        #[arg(long, short = 'i')]
        install: bool,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Task description (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,

    /// Deadline: YYYY-MM-DD, today, tomorrow, friday, in 3 days, dec 15
    ///
    /// Defaults to today.
    #[arg(long, short = 'd')]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Task ID
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    pub id: TaskId,

    /// New description (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,

    /// New deadline; keeps the current one when omitted
    #[arg(long, short = 'd')]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print resolved connection settings (password masked)
    Show,
    /// Print the config file location
    Path,
}

/// Join positional words into one description.
#[must_use]
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
