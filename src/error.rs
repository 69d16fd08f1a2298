//! Error types with actionable diagnostics.
//!
//! Every variant says what went wrong and what to try next, so a failed
//! launch can be fixed without reading the source.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;
use crate::naming::NamingError;

/// Result type alias for rotulo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while naming artifacts or launching the trainer.
#[derive(Error, Debug)]
pub enum Error {
    /// Launch configuration file not found.
    #[error("Configuration file not found: {path}\n  → Create a launch config or check the path")]
    ConfigNotFound { path: PathBuf },

    /// Launch configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Launch configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Artifact name could not be encoded or decoded.
    #[error("{0}\n  → Names use '_' as the field delimiter; keep it out of dataset, architecture and augmentation names")]
    Naming(#[from] NamingError),

    /// Dataset path does not exist.
    #[error("Dataset not found: {path}\n  → Check run.dataset_path in the launch config")]
    DatasetNotFound { path: PathBuf },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Trainer process exited unsuccessfully.
    #[error("Trainer exited with {status}: {command}\n  → Inspect the trainer output above; the artifact was not recorded")]
    TrainerFailed { command: String, status: String },

    /// Unexpected condition.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Check if this error is caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::Validation(_)
                | Self::Naming(_)
                | Self::DatasetNotFound { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::Validation(_) => "E003",
            Self::Naming(NamingError::InvalidField { .. }) => "E010",
            Self::Naming(NamingError::MalformedName { .. }) => "E011",
            Self::DatasetNotFound { .. } => "E020",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
            Self::TrainerFailed { .. } => "E060",
            Self::Internal { .. } => "E999",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}
