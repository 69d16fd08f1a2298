//! Launch records written next to the trainer's reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::naming::TrainingRunDescriptor;

/// What was launched, when, and how it ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Run parameters encoded in the artifact name
    pub descriptor: TrainingRunDescriptor,
    /// Canonical artifact file name
    pub artifact_name: String,
    /// Full trainer command, program first
    pub command: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Trainer exit code
    pub exit_code: Option<i32>,
    /// Whether the artifact was present in the artifact directory afterwards
    pub artifact_found: bool,
}

impl LaunchRecord {
    /// Wall-clock training time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// Write the record as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("creating {}", parent.display()), e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| Error::io(format!("writing {}", path.display()), e))
    }

    /// Read a record written by [`save`](Self::save)
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("reading {}", path.display()), e))?;
        Ok(serde_json::from_str(&json)?)
    }
}
