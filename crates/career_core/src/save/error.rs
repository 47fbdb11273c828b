use thiserror::Error;

/// Why a persisted snapshot was refused. Loading never partially applies.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("snapshot must be a JSON object")]
    NotAnObject,

    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` must be {expected}, found {found}")]
    WrongType { field: String, expected: &'static str, found: &'static str },

    #[error("field `createdAt` is not an RFC 3339 timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl SnapshotError {
    /// Name of the offending field, when one is known.
    pub fn field(&self) -> Option<&str> {
        match self {
            SnapshotError::MissingField { field }
            | SnapshotError::WrongType { field, .. }
            | SnapshotError::InvalidField { field, .. } => Some(field),
            SnapshotError::InvalidTimestamp { .. } => Some("createdAt"),
            _ => None,
        }
    }
}
