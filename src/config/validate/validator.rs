//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::{Architecture, LaunchSpec};
use crate::naming::{ArtifactNamer, NamingError, MAX_EPOCHS};

const VGG16_IMAGE_SIZE: u32 = 224;

/// Validate a launch specification
///
/// Checks numeric ranges, the fixed input shape of vgg16, and that the run
/// parameters produce a valid artifact name. Filesystem paths are checked at
/// launch time, not here.
pub fn validate_config(spec: &LaunchSpec) -> Result<(), ValidationError> {
    let run = &spec.run;

    if run.epochs == 0 || run.epochs > MAX_EPOCHS {
        return Err(ValidationError::InvalidEpochs(run.epochs));
    }

    if !(run.lr > 0.0 && run.lr <= 1.0) {
        return Err(ValidationError::InvalidLearningRate(run.lr));
    }

    if run.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(run.batch_size));
    }

    if run.image_size == 0 {
        return Err(ValidationError::InvalidImageSize(run.image_size));
    }

    if run.channels != 1 && run.channels != 3 {
        return Err(ValidationError::InvalidChannels(run.channels));
    }

    if run.architecture == Architecture::Vgg16
        && (run.channels != 3 || run.image_size != VGG16_IMAGE_SIZE)
    {
        return Err(ValidationError::FixedInputArchitecture {
            channels: run.channels,
            image_size: run.image_size,
        });
    }

    if let Some(index) = run.operation_index {
        if index == 0 {
            return Err(ValidationError::InvalidOperationIndex(index));
        }
    }

    // Index 1 stands in for an index allocated later
    let descriptor = spec.descriptor(run.operation_index.unwrap_or(1));
    match ArtifactNamer::encode(&descriptor) {
        Ok(_) => Ok(()),
        Err(NamingError::InvalidField { field, reason, .. }) => {
            Err(ValidationError::InvalidNameField { field, reason })
        }
        Err(NamingError::MalformedName { reason, .. }) => Err(ValidationError::InvalidNameField {
            field: "artifact name",
            reason,
        }),
    }
}
