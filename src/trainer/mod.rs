//! External trainer invocation
//!
//! The trainer is a black box: it takes command-line flags and writes a
//! `.h5` model under the name it is handed. This module builds that command
//! from a [`LaunchSpec`](crate::config::LaunchSpec), runs it, and records
//! what was run.

mod invocation;
mod launch;
mod record;

pub use invocation::{shell_quote, TrainerInvocation};
pub use launch::{execute, plan_launch, report_path, resolve_operation_index, LaunchPlan};
pub use record::LaunchRecord;
