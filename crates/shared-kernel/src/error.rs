// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ScriptLinesError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ScriptLinesError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, ScriptLinesError>;

/// User-facing classification of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Transport,
    Filesystem,
    Output,
    Internal,
}

impl ScriptLinesError {
    /// Classifies the innermost error, looking through any added context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Domain(_) => ErrorKind::Validation,
            Self::Infrastructure(err) => err.kind(),
            Self::Application(_) => ErrorKind::Internal,
        }
    }
}

/// Errors raised while validating user input, before any I/O happens.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("IDs cannot be empty")]
    EmptyInput,

    #[error("Invalid script ID '{id}': {reason}")]
    InvalidScriptId { id: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Worker task failed: {reason}")]
    TaskFailed { reason: String },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Could not find {kind} with ID {id}")]
    NotFound { kind: String, id: String },

    #[error("Request to {url} failed: {details}")]
    Transport { url: String, details: String },

    #[error("Failed to decode response from {url}: {details}")]
    Decode { url: String, details: String },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl InfrastructureError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Transport { .. } | Self::Decode { .. } => ErrorKind::Transport,
            Self::FileSystemOperation { .. } | Self::FileRead { .. } => ErrorKind::Filesystem,
            Self::OutputError { .. } => ErrorKind::Output,
        }
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for ScriptLinesError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode { url: String::from("<inline>"), details: err.to_string() }
    }
}

impl From<serde_json::Error> for ScriptLinesError {
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
    E: Into<ScriptLinesError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ScriptLinesError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ScriptLinesError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
