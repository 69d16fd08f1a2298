//! Launch planning and execution

use chrono::Utc;
use std::path::{Path, PathBuf};

use super::invocation::TrainerInvocation;
use super::record::LaunchRecord;
use crate::config::{validate_config, LaunchSpec};
use crate::error::{Error, Result};
use crate::naming::{next_operation_index, ArtifactNamer, TrainingRunDescriptor};

/// Everything needed to start one training run
///
/// All paths are resolved the way the trainer process sees them.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    pub descriptor: TrainingRunDescriptor,
    /// Canonical artifact file name
    pub artifact_name: String,
    /// Dataset the trainer reads
    pub dataset_path: PathBuf,
    /// Where the artifact is expected after training
    pub artifact_path: PathBuf,
    /// Where the trainer writes its report
    pub report_path: PathBuf,
    /// Where the launch record is written
    pub record_path: PathBuf,
    pub invocation: TrainerInvocation,
    /// True when the index came from scanning the artifact directory
    pub index_allocated: bool,
}

/// Operation index for `spec`: the fixed one, or the next free one in its
/// artifact directory. The flag is true when the index was allocated.
pub fn resolve_operation_index(spec: &LaunchSpec) -> Result<(u32, bool)> {
    match spec.run.operation_index {
        Some(index) => Ok((index, false)),
        None => {
            let index = next_operation_index(&spec.artifact_dir(), &spec.descriptor(1))?;
            Ok((index, true))
        }
    }
}

/// Validate `spec`, resolve its operation index, and build the trainer command
pub fn plan_launch(spec: &LaunchSpec) -> Result<LaunchPlan> {
    validate_config(spec)?;

    let (operation_index, index_allocated) = resolve_operation_index(spec)?;
    let descriptor = spec.descriptor(operation_index);
    let artifact_name = ArtifactNamer::encode(&descriptor)?;
    let invocation = TrainerInvocation::from_spec(spec, &descriptor)?;
    let report_dir = spec.report_dir();

    Ok(LaunchPlan {
        dataset_path: spec.dataset_path(),
        artifact_path: spec.artifact_dir().join(&artifact_name),
        report_path: report_path(&report_dir, &descriptor)?,
        record_path: report_dir.join(format!("{artifact_name}_launch.json")),
        artifact_name,
        descriptor,
        invocation,
        index_allocated,
    })
}

/// Path of the trainer's report for `descriptor`
///
/// The trainer appends `_report.txt` to the model name it was given, and
/// that name is the full artifact file name including `.h5`.
pub fn report_path(report_dir: &Path, descriptor: &TrainingRunDescriptor) -> Result<PathBuf> {
    let artifact_name = ArtifactNamer::encode(descriptor)?;
    Ok(report_dir.join(format!("{artifact_name}_report.txt")))
}

/// Run the trainer for `plan` and write its launch record
///
/// The dataset must exist before the trainer is started. A trainer that
/// exits unsuccessfully leaves no record behind.
pub fn execute(plan: &LaunchPlan) -> Result<LaunchRecord> {
    if !plan.dataset_path.exists() {
        return Err(Error::DatasetNotFound {
            path: plan.dataset_path.clone(),
        });
    }

    let started_at = Utc::now();
    let exit_code = plan.invocation.run()?;
    let finished_at = Utc::now();

    let record = LaunchRecord {
        descriptor: plan.descriptor.clone(),
        artifact_name: plan.artifact_name.clone(),
        command: plan.invocation.argv(),
        started_at,
        finished_at,
        exit_code,
        artifact_found: plan.artifact_path.is_file(),
    };
    record.save(&plan.record_path)?;
    Ok(record)
}
