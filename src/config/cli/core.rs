//! Core CLI types - Cli, Command, and argument structs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, ShellType};
use crate::config::{LaunchSpec, Optimizer};
use crate::naming::TrainingRunDescriptor;

/// Rotulo: canonical artifact names for CNN training runs
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "rotulo")]
#[command(version)]
#[command(about = "Name, parse and launch CNN training runs with canonical artifact names")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the canonical artifact name for a run
    Name(NameArgs),

    /// Decode an artifact name into its run parameters
    Parse(ParseArgs),

    /// Show the next free operation index in an artifact directory
    Next(NextArgs),

    /// Launch the trainer from a YAML launch config
    Launch(LaunchArgs),

    /// Validate a launch config without starting the trainer
    Validate(ValidateArgs),

    /// Display a launch config and the artifact name it resolves to
    Info(InfoArgs),

    /// Generate shell completions
    Completion(CompletionArgs),
}

/// Run parameters shared by `name` and `next`
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Dataset identifier
    #[arg(short, long)]
    pub dataset: String,

    /// Architecture identifier
    #[arg(short, long)]
    pub arch: String,

    /// Input channels (1 = grayscale, 3 = color)
    #[arg(short, long, default_value_t = 3)]
    pub channels: u32,

    /// Training epochs
    #[arg(short, long)]
    pub epochs: u32,

    /// Augmentation tag
    #[arg(long, default_value = "aug")]
    pub aug: String,
}

impl RunArgs {
    /// Descriptor for these parameters under `operation_index`
    pub fn descriptor(&self, operation_index: u32) -> TrainingRunDescriptor {
        TrainingRunDescriptor::new(
            self.dataset.clone(),
            self.arch.clone(),
            self.channels,
            self.epochs,
            self.aug.clone(),
            operation_index,
        )
    }
}

/// Arguments for the name command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct NameArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Operation index (defaults to 1)
    #[arg(short, long, conflicts_with = "dir")]
    pub index: Option<u32>,

    /// Allocate the operation index from this artifact directory
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the parse command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ParseArgs {
    /// Artifact file name (a leading directory is ignored)
    #[arg(value_name = "NAME")]
    pub name: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the next command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct NextArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Artifact directory to scan
    #[arg(long)]
    pub dir: PathBuf,
}

/// Arguments for the launch command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct LaunchArgs {
    /// Path to YAML launch config
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override number of epochs
    #[arg(short, long)]
    pub epochs: Option<u32>,

    /// Override learning rate
    #[arg(short, long)]
    pub lr: Option<f32>,

    /// Override optimizer (sgd, adam)
    #[arg(short, long)]
    pub optimizer: Option<Optimizer>,

    /// Override operation index
    #[arg(short, long)]
    pub index: Option<u32>,

    /// Override artifact directory
    #[arg(long)]
    pub artifact_dir: Option<PathBuf>,

    /// Print the trainer command without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML launch config
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML launch config
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the completion command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: ShellType,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a LaunchSpec
pub fn apply_overrides(spec: &mut LaunchSpec, args: &LaunchArgs) {
    if let Some(epochs) = args.epochs {
        spec.run.epochs = epochs;
    }
    if let Some(lr) = args.lr {
        spec.run.lr = lr;
    }
    if let Some(optimizer) = args.optimizer {
        spec.run.optimizer = optimizer;
    }
    if let Some(index) = args.index {
        spec.run.operation_index = Some(index);
    }
    if let Some(artifact_dir) = &args.artifact_dir {
        spec.output.artifact_dir = artifact_dir.clone();
    }
}
