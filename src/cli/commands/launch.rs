//! Launch command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, LaunchArgs};
use crate::trainer::{execute, plan_launch, LaunchPlan};

fn describe_plan(plan: &LaunchPlan) -> String {
    let source = if plan.index_allocated {
        "allocated"
    } else {
        "fixed"
    };
    [
        format!("  Artifact: {}", plan.artifact_name),
        format!(
            "  Operation index: {} ({source})",
            plan.descriptor.operation_index
        ),
        format!("  Artifact path: {}", plan.artifact_path.display()),
        format!("  Report: {}", plan.report_path.display()),
    ]
    .join("\n")
}

pub fn run_launch(args: LaunchArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Loading launch config: {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);

    let plan = plan_launch(&spec).map_err(|e| format!("Launch planning failed: {e}"))?;
    log(level, LogLevel::Normal, &describe_plan(&plan));
    log(
        level,
        LogLevel::Verbose,
        &format!("  Command: {}", plan.invocation.command_line()),
    );

    if args.dry_run {
        println!("{}", plan.invocation.command_line());
        return Ok(());
    }

    let record = execute(&plan).map_err(|e| format!("Launch failed: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Training finished in {:.1} minutes",
            record.elapsed_secs() / 60.0
        ),
    );
    if !record.artifact_found {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "Warning: artifact not found at {}",
                plan.artifact_path.display()
            ),
        );
    }
    log(
        level,
        LogLevel::Verbose,
        &format!("Launch record: {}", plan.record_path.display()),
    );

    Ok(())
}
