use thiserror::Error;

use crate::auth::AuthType;
use crate::config::{AUTH_TYPE_KEY, CONNECTION_TYPE_KEY};
use crate::source::FieldKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    // Parse errors
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field {key} has the wrong type: expected {expected}, got {actual}")]
    TypeMismatch {
        key: &'static str,
        expected: FieldKind,
        actual: FieldKind,
    },
    #[error("Field {key} out of range: {value} not in [{min}, {max}]")]
    InvalidRange {
        key: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("Unknown auth type: {0}")]
    UnknownAuthType(i64),
    #[error("Unknown connection type: {0:?}")]
    UnknownConnectionType(String),

    // Validation errors
    #[error("Incomplete {auth_type} credential, empty: {}", .missing.join(", "))]
    IncompleteCredential {
        auth_type: AuthType,
        missing: Vec<&'static str>,
    },
}

impl CredentialError {
    /// Field keys the error is about.
    pub fn fields(&self) -> &[&'static str] {
        match self {
            CredentialError::MissingField(key)
            | CredentialError::TypeMismatch { key, .. }
            | CredentialError::InvalidRange { key, .. } => std::slice::from_ref(key),
            CredentialError::UnknownAuthType(_) => &[AUTH_TYPE_KEY],
            CredentialError::UnknownConnectionType(_) => &[CONNECTION_TYPE_KEY],
            CredentialError::IncompleteCredential { missing, .. } => missing.as_slice(),
        }
    }

    /// True for errors raised while parsing, false for validation failures.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, CredentialError::IncompleteCredential { .. })
    }
}
