//! Configuration validation
//!
//! Validates launch specifications before the trainer is started.

mod error;
mod validator;

#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_config;
