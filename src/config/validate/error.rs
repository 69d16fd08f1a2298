//! Validation error types
//!
//! Defines all validation error variants for launch specifications.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidLearningRate(f32),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(u32),

    #[error("Invalid epochs: {0} (must be in 1..=999)")]
    InvalidEpochs(u32),

    #[error("Invalid image size: {0} (must be > 0)")]
    InvalidImageSize(u32),

    #[error("Invalid channel count: {0} (must be 1 for grayscale or 3 for color)")]
    InvalidChannels(u32),

    #[error("Invalid operation index: {0} (must be > 0)")]
    InvalidOperationIndex(u32),

    #[error("vgg16 requires 3 channels and 224px images, got {channels} channels at {image_size}px")]
    FixedInputArchitecture { channels: u32, image_size: u32 },

    #[error("Invalid {field}: {reason}")]
    InvalidNameField { field: &'static str, reason: String },
}
