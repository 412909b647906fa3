// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// The domain crate contributes no variant: the absence calculator is total
/// over parsed-date input and never fails.
#[derive(Debug, Error)]
pub enum AbsenceDaysError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AbsenceDaysError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, AbsenceDaysError>;

/// Errors raised at the load boundary: trip sources, schema validation,
/// credential resolution.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("required column '{column}' is missing from the source header")]
    MissingColumn { column: String },

    #[error("cannot interpret '{value}' as a calendar date (expected YYYY-MM-DD or DD/MM/YYYY)")]
    DateParseFailure { value: String },

    #[error("trip source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    #[error("authentication failed: {reason}")]
    AuthenticationFailure { reason: String },

    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} payload: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("invalid value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AbsenceDaysError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AbsenceDaysError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AbsenceDaysError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AbsenceDaysError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
