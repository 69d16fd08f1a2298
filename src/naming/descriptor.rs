//! Training run descriptor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::NamingError;
use super::namer::ArtifactNamer;

/// Parameters of a single training run, as encoded in its artifact name
///
/// Descriptors are plain values: a new run gets a new descriptor, usually
/// derived from the previous one with [`with_operation_index`].
///
/// [`with_operation_index`]: TrainingRunDescriptor::with_operation_index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingRunDescriptor {
    /// Dataset identifier (e.g. `NCWV2`)
    pub dataset_name: String,

    /// Architecture identifier (e.g. `lenet`)
    pub architecture_name: String,

    /// Input channels: 1 for grayscale, 3 for color
    pub num_channels: u32,

    /// Number of training epochs (at most 999)
    pub num_epochs: u32,

    /// Augmentation tag (e.g. `aug`)
    pub augmentation_tag: String,

    /// Counter distinguishing runs that share every other parameter
    pub operation_index: u32,
}

impl TrainingRunDescriptor {
    /// Create a new descriptor
    pub fn new(
        dataset_name: impl Into<String>,
        architecture_name: impl Into<String>,
        num_channels: u32,
        num_epochs: u32,
        augmentation_tag: impl Into<String>,
        operation_index: u32,
    ) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            architecture_name: architecture_name.into(),
            num_channels,
            num_epochs,
            augmentation_tag: augmentation_tag.into(),
            operation_index,
        }
    }

    /// Same run parameters under a different operation index
    pub fn with_operation_index(&self, operation_index: u32) -> Self {
        Self {
            operation_index,
            ..self.clone()
        }
    }

    /// True when both descriptors differ at most in their operation index
    pub fn same_parameters(&self, other: &Self) -> bool {
        self.dataset_name == other.dataset_name
            && self.architecture_name == other.architecture_name
            && self.num_channels == other.num_channels
            && self.num_epochs == other.num_epochs
            && self.augmentation_tag == other.augmentation_tag
    }

    /// True for single-channel input
    pub fn is_grayscale(&self) -> bool {
        self.num_channels == 1
    }

    /// Canonical artifact file name
    pub fn file_name(&self) -> Result<String, NamingError> {
        ArtifactNamer::encode(self)
    }
}

impl FromStr for TrainingRunDescriptor {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactNamer::decode(s)
    }
}

impl fmt::Display for TrainingRunDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} ({} ch, {} epochs, {}) #{}",
            self.dataset_name,
            self.architecture_name,
            self.num_channels,
            self.num_epochs,
            self.augmentation_tag,
            self.operation_index
        )
    }
}
