//! Error types with actionable diagnostics.
//!
//! Every user-facing variant carries enough context to fix the problem
//! without reading the source.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;

/// Result type alias for seaweed-apt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, validating or writing configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found at expected path.
    #[error("Configuration file not found: {path}\n  → Create one with `seaweed-apt init --output {path}`")]
    ConfigNotFound { path: PathBuf },

    /// Document is not valid YAML, has a wrong type, an unknown key,
    /// an out-of-set enum value or a missing required field.
    #[error("Invalid configuration in {origin}:\n  {message}\n  → Check the field name and value at the indicated line")]
    ConfigParsing { origin: String, message: String },

    /// A field is outside its accepted range.
    #[error("Invalid configuration value for '{field}': {0}", field = .0.field())]
    Validation(#[from] ValidationError),

    /// Refused to overwrite an existing file.
    #[error("File already exists: {path}\n  → Pass --force to overwrite it")]
    AlreadyExists { path: PathBuf },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is fixable by editing input or flags.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::Validation(_)
                | Self::AlreadyExists { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::Validation(_) => "E003",
            Self::AlreadyExists { .. } => "E004",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}
