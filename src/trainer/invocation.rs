//! Trainer command construction

use std::path::PathBuf;
use std::process::Command;

use crate::config::LaunchSpec;
use crate::error::{Error, Result};
use crate::naming::{ArtifactNamer, TrainingRunDescriptor};

/// A fully resolved trainer command
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerInvocation {
    /// Interpreter or executable
    pub program: PathBuf,
    /// Entry point followed by trainer flags
    pub args: Vec<String>,
    /// Working directory for the child process
    pub working_dir: Option<PathBuf>,
}

impl TrainerInvocation {
    /// Build the trainer command for `descriptor` under `spec`
    ///
    /// `--model-name` receives the canonical artifact file name. Grayscale
    /// input adds `-g True`; the trainer parses that flag with Python's
    /// `bool`, so color input passes nothing at all.
    pub fn from_spec(spec: &LaunchSpec, descriptor: &TrainingRunDescriptor) -> Result<Self> {
        let model_name = ArtifactNamer::encode(descriptor)?;
        let run = &spec.run;

        let mut args = vec![
            spec.trainer.entrypoint.display().to_string(),
            "-a".to_string(),
            run.architecture.to_string(),
            "-d".to_string(),
            run.dataset_path.display().to_string(),
            "-mn".to_string(),
            model_name,
            "-e".to_string(),
            descriptor.num_epochs.to_string(),
            "-etha".to_string(),
            run.lr.to_string(),
            "-o".to_string(),
            run.optimizer.to_string(),
            "-b".to_string(),
            run.batch_size.to_string(),
            "-i".to_string(),
            run.image_size.to_string(),
        ];
        if descriptor.is_grayscale() {
            args.push("-g".to_string());
            args.push("True".to_string());
        }

        Ok(Self {
            program: spec.trainer.interpreter.clone(),
            args,
            working_dir: spec.trainer.working_dir.clone(),
        })
    }

    /// Program followed by its arguments
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Single shell line equivalent to this invocation
    pub fn command_line(&self) -> String {
        let line = self
            .argv()
            .iter()
            .map(|arg| shell_quote(arg))
            .collect::<Vec<_>>()
            .join(" ");
        match &self.working_dir {
            Some(dir) => format!("cd {} && {line}", shell_quote(&dir.display().to_string())),
            None => line,
        }
    }

    /// Run the trainer to completion with inherited stdio
    ///
    /// Returns the exit code (None when killed by a signal).
    pub fn run(&self) -> Result<Option<i32>> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|e| {
            Error::io(format!("starting trainer {}", self.program.display()), e)
        })?;

        if status.success() {
            Ok(status.code())
        } else {
            Err(Error::TrainerFailed {
                command: self.command_line(),
                status: status.to_string(),
            })
        }
    }
}

/// Quote `arg` for a POSIX shell when it contains anything but safe characters
pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./=:+,@%".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
