//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, validate_config, InfoArgs, LaunchSpec, OutputFormat};
use crate::naming::ArtifactNamer;
use crate::trainer::resolve_operation_index;

/// Artifact name the launch config resolves to right now
///
/// Fails for configs that `launch` would refuse.
pub fn resolved_artifact_name(spec: &LaunchSpec) -> Result<String, String> {
    validate_config(spec).map_err(|e| format!("Validation failed: {e}"))?;
    let (index, _) =
        resolve_operation_index(spec).map_err(|e| format!("Index allocation failed: {e}"))?;
    ArtifactNamer::encode(&spec.descriptor(index)).map_err(|e| format!("Naming error: {e}"))
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    let artifact = resolved_artifact_name(&spec)?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Launch Configuration Info:");
            println!();
            println!(
                "Dataset: {} ({})",
                spec.run.dataset_name,
                spec.dataset_path().display()
            );
            println!("Architecture: {}", spec.run.architecture);
            println!("Optimizer: {} (lr={})", spec.run.optimizer, spec.run.lr);
            println!("Epochs: {}", spec.run.epochs);
            println!("Batch size: {}", spec.run.batch_size);
            println!("Artifact: {artifact}");
            println!("Artifact dir: {}", spec.artifact_dir().display());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
