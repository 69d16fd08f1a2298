//! CLI argument parsing
//!
//! This module provides the command-line interface for rotulo.
//!
//! # Usage
//!
//! ```bash
//! rotulo name --dataset NCWV2 --arch lenet --epochs 2 --index 1
//! rotulo parse NCWV2_lenet_ch3_it002_aug_01.h5 --format json
//! rotulo next --dir output/models --dataset NCWV2 --arch lenet --epochs 2
//! rotulo launch launch.yaml --dry-run
//! rotulo validate launch.yaml
//! ```

mod core;
mod types;

#[cfg(test)]
mod tests;

pub use core::{
    apply_overrides, parse_args, Cli, Command, CompletionArgs, InfoArgs, LaunchArgs, NameArgs,
    NextArgs, ParseArgs, RunArgs, ValidateArgs,
};
pub use types::{OutputFormat, ShellType};
