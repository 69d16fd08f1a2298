//! Naming error types

/// Errors raised while encoding or decoding artifact names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// A descriptor field cannot be rendered into a decodable name.
    #[error("Invalid field '{field}' = {value:?}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A candidate file name does not follow the canonical layout.
    #[error("Malformed artifact name {name:?}: {reason}")]
    MalformedName { name: String, reason: String },
}

impl NamingError {
    pub(crate) fn invalid_field(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        Self::MalformedName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
