//! # rotulo
//!
//! Canonical artifact names for CNN training runs, and a launcher for the
//! external trainer that produces them.
//!
//! - [`naming`]: encode/decode between run parameters and `.h5` file names
//! - [`config`]: YAML launch specs, validation, CLI arguments
//! - [`trainer`]: trainer command construction and execution
//! - [`cli`]: command handlers behind the `rotulo` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod trainer;

pub use error::{Error, Result};
pub use naming::{ArtifactNamer, NamingError, TrainingRunDescriptor};
