//! Parse command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, ParseArgs};
use crate::naming::{ArtifactNamer, TrainingRunDescriptor};

/// Render a descriptor in the requested format
pub fn format_descriptor(
    descriptor: &TrainingRunDescriptor,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok([
            format!("Dataset: {}", descriptor.dataset_name),
            format!("Architecture: {}", descriptor.architecture_name),
            format!("Channels: {}", descriptor.num_channels),
            format!("Epochs: {}", descriptor.num_epochs),
            format!("Augmentation: {}", descriptor.augmentation_tag),
            format!("Operation index: {}", descriptor.operation_index),
        ]
        .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(descriptor)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => serde_yaml::to_string(descriptor)
            .map_err(|e| format!("YAML serialization error: {e}")),
    }
}

pub fn run_parse(args: ParseArgs, level: LogLevel) -> Result<(), String> {
    let file_name = args
        .name
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("Not a file name: {}", args.name.display()))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Decoding artifact name: {file_name}"),
    );

    let descriptor = ArtifactNamer::decode(file_name).map_err(|e| format!("Naming error: {e}"))?;
    println!("{}", format_descriptor(&descriptor, args.format)?);
    Ok(())
}
