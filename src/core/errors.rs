//! Custom error types for translation and generation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fallback message for faults that carry no description
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// API key is unset or still the placeholder
    #[error("{message}")]
    ConfigError {
        /// What needs configuring
        message: String,
    },

    /// Request failed before a response was obtained
    #[error("{message}")]
    NetworkError {
        /// Transport fault description
        message: String,
    },

    /// API returned a non-2xx status
    #[error("API Error: {message} (Status: {status})")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// `error.message` or the status reason
        message: String,
    },

    /// API returned 2xx but the body carries an error message instead of a candidate
    #[error("{message}")]
    ErrorPayload {
        /// Message reported by the API
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("{message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl TranslationError {
    /// Coarse category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::ConfigError { .. } => ErrorKind::Configuration,
            TranslationError::NetworkError { .. } | TranslationError::HttpError(_) => {
                ErrorKind::Transport
            }
            TranslationError::ApiError { .. } | TranslationError::ErrorPayload { .. } => {
                ErrorKind::Remote
            }
            TranslationError::InvalidResponseError { .. } => ErrorKind::Parse,
        }
    }
}

/// Failure categories surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// API key missing; needs operator action
    Configuration,
    /// No response was obtained
    Transport,
    /// Remote side reported an error
    Remote,
    /// Response did not match the expected shape
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Remote => write!(f, "remote"),
            ErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Random string generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Requested length is outside the supported range
    #[error("Invalid length {length}: must be between {min} and {max}")]
    InvalidLength {
        /// Requested length
        length: usize,
        /// Inclusive lower bound
        min: usize,
        /// Inclusive upper bound
        max: usize,
    },
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_format() {
        let err = TranslationError::ApiError {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API Error: quota exceeded (Status: 429)");
        assert_eq!(err.kind(), ErrorKind::Remote);
    }

    #[test]
    fn test_error_kinds() {
        let config = TranslationError::ConfigError { message: "no key".into() };
        let network = TranslationError::NetworkError { message: "refused".into() };
        let parse = TranslationError::InvalidResponseError { message: "bad".into() };
        let payload = TranslationError::ErrorPayload { message: "blocked".into() };

        assert_eq!(config.kind(), ErrorKind::Configuration);
        assert_eq!(network.kind(), ErrorKind::Transport);
        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert_eq!(payload.kind(), ErrorKind::Remote);
        assert_eq!(payload.to_string(), "blocked");
    }

    #[test]
    fn test_generator_error_message() {
        let err = GeneratorError::InvalidLength { length: 3, min: 8, max: 64 };
        assert_eq!(err.to_string(), "Invalid length 3: must be between 8 and 64");
    }
}
