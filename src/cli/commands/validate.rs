//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, validate_config, LaunchSpec, ValidateArgs};

/// Format trainer configuration as a string
pub fn format_trainer_info(spec: &LaunchSpec) -> String {
    let mut lines = vec![
        format!("  Interpreter: {}", spec.trainer.interpreter.display()),
        format!("  Entry point: {}", spec.trainer.entrypoint.display()),
    ];
    if let Some(dir) = &spec.trainer.working_dir {
        lines.push(format!("  Working dir: {}", dir.display()));
    }
    lines.join("\n")
}

/// Format run parameters as a string
pub fn format_run_info(spec: &LaunchSpec) -> String {
    let run = &spec.run;
    let mut lines = vec![
        format!(
            "  Dataset: {} ({})",
            run.dataset_name,
            run.dataset_path.display()
        ),
        format!("  Architecture: {}", run.architecture),
        format!(
            "  Input: {}x{}x{}",
            run.image_size, run.image_size, run.channels
        ),
        format!("  Epochs: {}", run.epochs),
        format!("  Optimizer: {} (lr={})", run.optimizer, run.lr),
        format!("  Batch size: {}", run.batch_size),
        format!("  Augmentation: {}", run.augmentation_tag),
    ];
    match run.operation_index {
        Some(index) => lines.push(format!("  Operation index: {index}")),
        None => lines.push("  Operation index: allocated at launch".to_string()),
    }
    lines.join("\n")
}

/// Format output locations as a string
pub fn format_output_info(spec: &LaunchSpec) -> String {
    format!(
        "  Artifacts: {}\n  Reports: {}",
        spec.artifact_dir().display(),
        spec.report_dir().display()
    )
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &LaunchSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_trainer_info(spec));
    println!();
    println!("{}", format_run_info(spec));
    println!();
    println!("{}", format_output_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn make_test_spec() -> LaunchSpec {
        parse_config(
            r#"
trainer:
  interpreter: /opt/envs/cnn/bin/python
  working_dir: /srv/trainer
run:
  dataset_path: datasets/NCWV2
  dataset_name: NCWV2
  architecture: karpathynet
  channels: 1
  epochs: 15
  optimizer: adam
  lr: 0.01
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_trainer_info() {
        let info = format_trainer_info(&make_test_spec());
        assert!(info.contains("/opt/envs/cnn/bin/python"));
        assert!(info.contains("trainer/main.py"));
        assert!(info.contains("/srv/trainer"));
    }

    #[test]
    fn test_format_trainer_info_no_working_dir() {
        let mut spec = make_test_spec();
        spec.trainer.working_dir = None;
        assert!(!format_trainer_info(&spec).contains("Working dir"));
    }

    #[test]
    fn test_format_run_info() {
        let info = format_run_info(&make_test_spec());
        assert!(info.contains("NCWV2"));
        assert!(info.contains("karpathynet"));
        assert!(info.contains("64x64x1"));
        assert!(info.contains("adam (lr=0.01)"));
        assert!(info.contains("allocated at launch"));
    }

    #[test]
    fn test_format_run_info_fixed_index() {
        let mut spec = make_test_spec();
        spec.run.operation_index = Some(3);
        assert!(format_run_info(&spec).contains("Operation index: 3"));
    }

    #[test]
    fn test_format_output_info() {
        let info = format_output_info(&make_test_spec());
        assert!(info.contains("output/models"));
        assert!(info.contains("output/reports"));
    }
}
