//! Error handling for the prompt improver
//!
//! This module provides the error type shared by the remote path and the
//! dispatcher:
//! - One variant per failure the remote path can produce
//! - A stable `ErrorKind` code for each variant, carried on failed results
//! - Conversion from transport errors
//! - Convenient Result type alias

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mapping;

/// Result type for prompt improver operations
pub type Result<T> = std::result::Result<T, ImproveError>;

/// Main error type for the prompt improver
#[derive(Error, Debug)]
pub enum ImproveError {
    /// The prompt was empty after trimming
    #[error("Original prompt cannot be empty")]
    EmptyPrompt,

    /// No credential was supplied for the remote path
    #[error("API key is required")]
    MissingCredential,

    /// The endpoint answered with a non-success status
    #[error("API request failed: {}", format_status(.status, .reason))]
    Transport {
        status: u16,
        reason: String,
    },

    /// The endpoint answered but carried no usable completion text
    #[error("No improved prompt received from API")]
    EmptyResponse,

    /// Network or unexpected failures, carrying the underlying message
    #[error("{0}")]
    Unknown(String),

    /// Client configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn format_status(status: &u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, reason)
    }
}

impl ImproveError {
    /// Create a transport error from a status code and its reason phrase
    pub fn transport(status: u16, reason: impl Into<String>) -> Self {
        ImproveError::Transport {
            status,
            reason: reason.into(),
        }
    }

    /// Create an unknown error
    pub fn unknown(message: impl Into<String>) -> Self {
        ImproveError::Unknown(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        ImproveError::Configuration(message.into())
    }

    /// The stable kind code for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImproveError::EmptyPrompt => ErrorKind::InvalidInput,
            ImproveError::MissingCredential => ErrorKind::MissingCredential,
            ImproveError::Transport { .. } => ErrorKind::TransportError,
            ImproveError::EmptyResponse => ErrorKind::EmptyResponse,
            ImproveError::Unknown(_) => ErrorKind::UnknownError,
            ImproveError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ImproveError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure was detected before any request was sent
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ImproveError::EmptyPrompt | ImproveError::MissingCredential
        )
    }
}

/// Stable classification of an `ImproveError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidInput,
    MissingCredential,
    TransportError,
    EmptyResponse,
    UnknownError,
    Configuration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::MissingCredential => "MissingCredential",
            ErrorKind::TransportError => "TransportError",
            ErrorKind::EmptyResponse => "EmptyResponse",
            ErrorKind::UnknownError => "UnknownError",
            ErrorKind::Configuration => "Configuration",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert reqwest errors to ImproveError
impl From<reqwest::Error> for ImproveError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return mapping::map_http_error(status);
        }

        ImproveError::Unknown(err.to_string())
    }
}
