//! Encode/decode between descriptors and canonical file names

use super::descriptor::TrainingRunDescriptor;
use super::error::NamingError;

/// Field delimiter inside an artifact name
pub const DELIMITER: char = '_';

/// Artifact file extension, including the dot
pub const EXTENSION: &str = ".h5";

/// Zero-padded width of the epoch segment
pub const EPOCH_WIDTH: usize = 3;

/// Minimum zero-padded width of the operation index segment
pub const INDEX_WIDTH: usize = 2;

/// Largest epoch count the epoch segment can hold
pub const MAX_EPOCHS: u32 = 999;

const CHANNEL_MARKER: &str = "ch";
const EPOCH_MARKER: &str = "it";
const SEGMENTS: usize = 6;

/// Stateless mapping between [`TrainingRunDescriptor`] and file names
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactNamer;

impl ArtifactNamer {
    /// Render the canonical file name for `descriptor`
    ///
    /// Fails with [`NamingError::InvalidField`] when the result could not be
    /// decoded back into the same descriptor.
    pub fn encode(descriptor: &TrainingRunDescriptor) -> Result<String, NamingError> {
        Ok(format!("{}{EXTENSION}", Self::stem(descriptor)?))
    }

    /// Canonical file name without the extension
    pub fn stem(descriptor: &TrainingRunDescriptor) -> Result<String, NamingError> {
        check_text_field("dataset_name", &descriptor.dataset_name)?;
        check_text_field("architecture_name", &descriptor.architecture_name)?;
        check_text_field("augmentation_tag", &descriptor.augmentation_tag)?;

        if descriptor.num_channels == 0 {
            return Err(NamingError::invalid_field(
                "num_channels",
                descriptor.num_channels,
                "must be positive",
            ));
        }
        if descriptor.num_epochs > MAX_EPOCHS {
            return Err(NamingError::invalid_field(
                "num_epochs",
                descriptor.num_epochs,
                format!("does not fit in {EPOCH_WIDTH} digits (max {MAX_EPOCHS})"),
            ));
        }
        if descriptor.operation_index == 0 {
            return Err(NamingError::invalid_field(
                "operation_index",
                descriptor.operation_index,
                "must be positive",
            ));
        }

        Ok(format!(
            "{dataset}{d}{arch}{d}{CHANNEL_MARKER}{channels}{d}{EPOCH_MARKER}{epochs:0ew$}{d}{aug}{d}{index:0iw$}",
            dataset = descriptor.dataset_name,
            arch = descriptor.architecture_name,
            channels = descriptor.num_channels,
            epochs = descriptor.num_epochs,
            aug = descriptor.augmentation_tag,
            index = descriptor.operation_index,
            d = DELIMITER,
            ew = EPOCH_WIDTH,
            iw = INDEX_WIDTH,
        ))
    }

    /// Reconstruct the descriptor encoded in `name`
    ///
    /// Only the canonical rendering is accepted, so `encode(decode(n)) == n`
    /// holds for every name this returns `Ok` for.
    pub fn decode(name: &str) -> Result<TrainingRunDescriptor, NamingError> {
        let stem = name
            .strip_suffix(EXTENSION)
            .ok_or_else(|| NamingError::malformed(name, format!("missing '{EXTENSION}' suffix")))?;

        let segments: Vec<&str> = stem.split(DELIMITER).collect();
        if segments.len() != SEGMENTS {
            return Err(NamingError::malformed(
                name,
                format!(
                    "expected {SEGMENTS} '{DELIMITER}'-separated segments, found {}",
                    segments.len()
                ),
            ));
        }

        let dataset_name = text_segment(name, "dataset", segments[0])?;
        let architecture_name = text_segment(name, "architecture", segments[1])?;

        let channels = segments[2]
            .strip_prefix(CHANNEL_MARKER)
            .ok_or_else(|| NamingError::malformed(name, "missing 'ch' channel marker"))?;
        let num_channels = numeric_segment(name, "channel", channels)?;
        if num_channels == 0 || channels.starts_with('0') {
            return Err(NamingError::malformed(
                name,
                format!("channel count '{channels}' is not a positive integer"),
            ));
        }

        let epochs = segments[3]
            .strip_prefix(EPOCH_MARKER)
            .ok_or_else(|| NamingError::malformed(name, "missing 'it' epoch marker"))?;
        if epochs.len() != EPOCH_WIDTH {
            return Err(NamingError::malformed(
                name,
                format!("epoch segment '{epochs}' must have exactly {EPOCH_WIDTH} digits"),
            ));
        }
        let num_epochs = numeric_segment(name, "epoch", epochs)?;

        let augmentation_tag = text_segment(name, "augmentation", segments[4])?;

        let index = segments[5];
        let operation_index = numeric_segment(name, "operation index", index)?;
        if operation_index == 0 || index != format!("{:0width$}", operation_index, width = INDEX_WIDTH) {
            return Err(NamingError::malformed(
                name,
                format!("operation index '{index}' is not a canonical positive index"),
            ));
        }

        Ok(TrainingRunDescriptor {
            dataset_name,
            architecture_name,
            num_channels,
            num_epochs,
            augmentation_tag,
            operation_index,
        })
    }
}

fn is_reserved(c: char) -> bool {
    c == DELIMITER || c == '/' || c == '\\'
}

fn check_text_field(field: &'static str, value: &str) -> Result<(), NamingError> {
    if value.is_empty() {
        return Err(NamingError::invalid_field(field, value, "must not be empty"));
    }
    if let Some(c) = value.chars().find(|&c| is_reserved(c)) {
        return Err(NamingError::invalid_field(
            field,
            value,
            format!("contains reserved character {c:?}"),
        ));
    }
    Ok(())
}

fn text_segment(name: &str, what: &str, segment: &str) -> Result<String, NamingError> {
    if segment.is_empty() {
        return Err(NamingError::malformed(name, format!("empty {what} segment")));
    }
    if segment.chars().any(is_reserved) {
        return Err(NamingError::malformed(
            name,
            format!("{what} segment '{segment}' contains a path separator"),
        ));
    }
    Ok(segment.to_string())
}

fn numeric_segment(name: &str, what: &str, digits: &str) -> Result<u32, NamingError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NamingError::malformed(
            name,
            format!("{what} segment '{digits}' is not a decimal integer"),
        ));
    }
    digits
        .parse()
        .map_err(|e| NamingError::malformed(name, format!("{what} segment '{digits}': {e}")))
}
