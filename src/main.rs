//! Rotulo CLI
//!
//! Canonical artifact naming and trainer launch entry point.
//!
//! # Usage
//!
//! ```bash
//! # Name an artifact
//! rotulo name --dataset NCWV2 --arch lenet --channels 3 --epochs 2 --index 1
//!
//! # Decode an artifact name
//! rotulo parse output/models/NCWV2_lenet_ch3_it002_aug_01.h5 --format json
//!
//! # Next free operation index
//! rotulo next --dir output/models --dataset NCWV2 --arch lenet --epochs 2
//!
//! # Launch the trainer
//! rotulo launch launch.yaml --epochs 2 --optimizer adam
//! ```

use clap::Parser;
use rotulo::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
