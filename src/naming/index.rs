//! Operation index allocation from an artifact directory

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::descriptor::TrainingRunDescriptor;
use super::namer::ArtifactNamer;
use crate::error::{Error, Result};

/// Operation indices already used in `dir` for runs with the same parameters
///
/// Entries whose names do not decode are skipped. A missing directory has no
/// indices. The result is sorted ascending.
pub fn existing_indices(dir: &Path, descriptor: &TrainingRunDescriptor) -> Result<Vec<u32>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(Error::io(
                format!("reading artifact directory {}", dir.display()),
                e,
            ))
        }
    };

    let mut indices = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| Error::io(format!("listing artifact directory {}", dir.display()), e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Ok(found) = ArtifactNamer::decode(name) {
            if found.same_parameters(descriptor) {
                indices.push(found.operation_index);
            }
        }
    }
    indices.sort_unstable();
    Ok(indices)
}

/// Next free operation index for `descriptor` in `dir` (1 when none exist)
///
/// The directory is only read. Two launches racing on the same directory
/// can be handed the same index.
pub fn next_operation_index(dir: &Path, descriptor: &TrainingRunDescriptor) -> Result<u32> {
    let indices = existing_indices(dir, descriptor)?;
    match indices.last() {
        Some(&max) => max.checked_add(1).ok_or_else(|| Error::Internal {
            message: format!("operation index overflow in {}", dir.display()),
        }),
        None => Ok(1),
    }
}
