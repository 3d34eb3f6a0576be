//! Unified error types for depscope.
//!
//! The tree transforms themselves are total over well-formed input and have
//! no error paths; everything here concerns the shell around them (dataset
//! loading, configuration, terminal IO).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for depscope operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DepscopeError {
    /// Errors while loading a project dataset
    #[error("Failed to load dataset: {context}")]
    Data {
        context: String,
        #[source]
        source: DataErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific dataset error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Dataset contains no projects")]
    EmptyDataset,

    #[error("No project named '{0}' in dataset")]
    UnknownProject(String),
}

/// Convenience result type for depscope operations.
pub type Result<T> = std::result::Result<T, DepscopeError>;

impl DepscopeError {
    /// Wrap an IO error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("failed to read {}", path.display()),
            path: Some(path),
            source,
        }
    }

    /// Wrap a dataset error with a human-readable context line.
    pub fn data(context: impl Into<String>, source: DataErrorKind) -> Self {
        Self::Data {
            context: context.into(),
            source,
        }
    }
}
