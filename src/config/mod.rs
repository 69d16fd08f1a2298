//! Launch configuration
//!
//! YAML launch specs, their validation, and the CLI surface that feeds them.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, CompletionArgs, InfoArgs, LaunchArgs, NameArgs,
    NextArgs, OutputFormat, ParseArgs, RunArgs, ShellType, ValidateArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::{Architecture, LaunchSpec, Optimizer, OutputSpec, RunSpec, TrainerSpec};
pub use validate::{validate_config, ValidationError};
