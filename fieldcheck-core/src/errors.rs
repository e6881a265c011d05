use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a field path was refused as an update target.
///
/// Only the first violated rule is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathErrorKind {
    #[error("An empty update path is not valid")]
    EmptyPath,

    #[error("The update path contains an empty field name, which is not allowed")]
    EmptyPart,

    #[error("The '_id' field cannot be updated")]
    RootIdField,

    #[error("A positional operator cannot be the first element of an update path")]
    RootPositional,

    #[error("A DBRef field ($id, $db, $ref) cannot be the first element of an update path")]
    RootReservedDbRefField,

    #[error("The dollar ($) prefixed field is not valid for storage")]
    InvalidDollarPrefixedField,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldCheckError {
    #[error("Invalid update path '{path}': {kind}")]
    InvalidPath {
        path: String,
        #[source]
        kind: PathErrorKind,
    },

    #[error("Segment index {index} out of range for a path with {len} segments")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot update '{first}' and '{second}' at the same time")]
    ConflictingPaths { first: String, second: String },

    #[error("Unknown update operator: {0}")]
    UnknownOperator(String),

    #[error("Malformed update document: {0}")]
    MalformedUpdate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FieldCheckError {
    pub fn invalid_path(path: impl Into<String>, kind: PathErrorKind) -> Self {
        Self::InvalidPath {
            path: path.into(),
            kind,
        }
    }

    /// The rejection kind, when this error came from path validation.
    pub fn path_error_kind(&self) -> Option<PathErrorKind> {
        match self {
            Self::InvalidPath { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FieldCheckError {
    fn from(err: serde_json::Error) -> Self {
        FieldCheckError::Serialization(err.to_string())
    }
}
