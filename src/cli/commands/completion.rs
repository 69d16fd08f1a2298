//! Completion command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{Cli, CompletionArgs, ShellType};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

impl From<ShellType> for Shell {
    fn from(shell: ShellType) -> Self {
        match shell {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
            ShellType::PowerShell => Shell::PowerShell,
        }
    }
}

/// Write the `rotulo` completion script for `shell` to `out`
pub fn write_completions(shell: ShellType, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(Shell::from(shell), &mut cmd, bin_name, out);
}

pub fn run_completion(args: CompletionArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Generating {} completions", args.shell),
    );
    write_completions(args.shell, &mut std::io::stdout());
    Ok(())
}
