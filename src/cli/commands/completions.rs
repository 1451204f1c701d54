//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell` and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TodoError;

const BIN_NAME: &str = "todolist";

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, TodoError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TodoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| {
        TodoError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("completion script is not UTF-8: {e}"),
        ))
    })
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(todolist completions bash)

# Or save to a file:
todolist completions bash > /usr/local/etc/bash_completion.d/todolist
"
        .to_string(),

        Shell::Zsh => r"# Add to ~/.zshrc (before compinit):
source <(todolist completions zsh)

# Or save to your fpath:
todolist completions zsh > ~/.zsh/completions/_todolist
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
todolist completions fish > ~/.config/fish/completions/todolist.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
todolist completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
todolist completions elvish > ~/.elvish/lib/todolist.elv

# Then add to ~/.elvish/rc.elv:
use todolist
"
        .to_string(),

        _ => format!("No installation instructions for {shell}\n"),
    }
}
