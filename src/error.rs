//! Error types for content queries

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by post repository queries
#[derive(Debug, Error)]
pub enum QueryError {
    /// The requested collection is not one of the recognized collections
    #[error("invalid collection `{0}`, expected one of: blog, rustzenAdmin")]
    InvalidCollection(String),

    /// The content store could not be read or a record failed its schema
    #[error(transparent)]
    ContentValidation(#[from] ValidationError),
}

/// Failures raised by a content store while producing records
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("content store unreachable at {path:?}: {source}")]
    Unreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in `{entry}`: {source}")]
    FrontMatter {
        entry: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("`{entry}` is missing required field `{field}`")]
    MissingField { entry: String, field: &'static str },

    #[error("`{entry}` has an invalid `{field}`: {reason}")]
    InvalidField {
        entry: String,
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn unreachable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreachable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(entry: &str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            entry: entry.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
