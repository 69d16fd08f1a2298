//! YAML schema for trainer launch configuration
//!
//! Defaults mirror the trainer's own defaults, so a minimal config only needs
//! the dataset and architecture.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::naming::TrainingRunDescriptor;

/// CNN architectures the trainer can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    LeNet,
    MiniVgg,
    KarpathyNet,
    /// Fixed 224x224x3 input and 1000 classes
    Vgg16,
}

impl Architecture {
    /// Selector passed to the trainer's `--architecture` flag
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::LeNet => "lenet",
            Architecture::MiniVgg => "minivgg",
            Architecture::KarpathyNet => "karpathynet",
            Architecture::Vgg16 => "vgg16",
        }
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenet" => Ok(Architecture::LeNet),
            "minivgg" => Ok(Architecture::MiniVgg),
            "karpathynet" => Ok(Architecture::KarpathyNet),
            "vgg16" => Ok(Architecture::Vgg16),
            _ => Err(format!(
                "Unknown architecture: {s}. Valid architectures: lenet, minivgg, karpathynet, vgg16"
            )),
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gradient descent variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimizer {
    #[default]
    Sgd,
    Adam,
}

impl Optimizer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Optimizer::Sgd => "sgd",
            Optimizer::Adam => "adam",
        }
    }
}

impl FromStr for Optimizer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sgd" => Ok(Optimizer::Sgd),
            "adam" => Ok(Optimizer::Adam),
            _ => Err(format!("Unknown optimizer: {s}. Valid optimizers: sgd, adam")),
        }
    }
}

impl fmt::Display for Optimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete launch specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// How to start the trainer program
    #[serde(default)]
    pub trainer: TrainerSpec,

    /// Parameters of the training run
    pub run: RunSpec,

    /// Where artifacts and reports land
    #[serde(default)]
    pub output: OutputSpec,
}

impl LaunchSpec {
    /// Descriptor for this run under the given operation index
    pub fn descriptor(&self, operation_index: u32) -> TrainingRunDescriptor {
        TrainingRunDescriptor::new(
            self.run.dataset_name.clone(),
            self.run.architecture.as_str(),
            self.run.channels,
            self.run.epochs,
            self.run.augmentation_tag.clone(),
            operation_index,
        )
    }

    /// Resolve `path` the way the trainer process sees it
    ///
    /// Relative paths are taken relative to `trainer.working_dir` when one is
    /// set, since that is the directory the trainer runs in.
    pub fn trainer_path(&self, path: &Path) -> PathBuf {
        match &self.trainer.working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Artifact directory as seen by the trainer
    pub fn artifact_dir(&self) -> PathBuf {
        self.trainer_path(&self.output.artifact_dir)
    }

    /// Report directory as seen by the trainer
    pub fn report_dir(&self) -> PathBuf {
        self.trainer_path(&self.output.report_dir)
    }

    /// Dataset location as seen by the trainer
    pub fn dataset_path(&self) -> PathBuf {
        self.trainer_path(&self.run.dataset_path)
    }
}

/// Trainer program location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerSpec {
    /// Interpreter binary (e.g. `python3` or a virtualenv interpreter)
    pub interpreter: PathBuf,

    /// Trainer entry point script
    pub entrypoint: PathBuf,

    /// Working directory for the trainer process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Default for TrainerSpec {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
            entrypoint: PathBuf::from("trainer/main.py"),
            working_dir: None,
        }
    }
}

/// Training run parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    /// Path handed to the trainer's `--dataset` flag
    pub dataset_path: PathBuf,

    /// Short dataset identifier used in the artifact name
    pub dataset_name: String,

    /// Network architecture
    pub architecture: Architecture,

    /// Input channels (1 = grayscale, 3 = color)
    #[serde(default = "default_channels")]
    pub channels: u32,

    /// Training epochs
    #[serde(default = "default_epochs")]
    pub epochs: u32,

    /// Learning rate
    #[serde(default = "default_lr")]
    pub lr: f32,

    /// Optimizer
    #[serde(default)]
    pub optimizer: Optimizer,

    /// Mini-batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,

    /// Square input image size in pixels
    #[serde(default = "default_image_size")]
    pub image_size: u32,

    /// Augmentation tag recorded in the artifact name
    #[serde(default = "default_augmentation_tag")]
    pub augmentation_tag: String,

    /// Fixed operation index; allocated from the artifact directory when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_index: Option<u32>,
}

fn default_channels() -> u32 {
    3
}

fn default_epochs() -> u32 {
    30
}

fn default_lr() -> f32 {
    0.001
}

fn default_batch_size() -> u32 {
    32
}

fn default_image_size() -> u32 {
    64
}

fn default_augmentation_tag() -> String {
    "aug".to_string()
}

/// Output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSpec {
    /// Directory holding trained `.h5` artifacts
    pub artifact_dir: PathBuf,

    /// Directory holding training reports and launch records. The trainer
    /// always writes reports to `output/reports` under its working directory,
    /// so this must point there for report paths to match.
    pub report_dir: PathBuf,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("output/models"),
            report_dir: PathBuf::from("output/reports"),
        }
    }
}
