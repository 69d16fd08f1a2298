//! CLI command implementations

mod completion;
mod info;
mod launch;
mod name;
mod next;
mod parse;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_cli(&cli);

    match cli.command {
        Command::Name(args) => name::run_name(args, log_level),
        Command::Parse(args) => parse::run_parse(args, log_level),
        Command::Next(args) => next::run_next(args, log_level),
        Command::Launch(args) => launch::run_launch(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Completion(args) => completion::run_completion(args, log_level),
    }
}
