//! Core data models for translation

use serde::{Deserialize, Serialize};

use crate::core::errors::{ErrorKind, TranslationError};

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Human-readable language name, e.g. "Hindi"
    pub target_language: String,
}

impl TranslationRequest {
    /// Build a request for `text` into `target_language`
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
        }
    }

    /// Instruction sent to the model as the sole content part
    pub fn prompt(&self) -> String {
        format!(
            "Translate the following English text to {}:\n\n\"{}\"\n\nTranslation:",
            self.target_language, self.text
        )
    }
}

/// Outcome of a single translate call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationResult {
    /// Translation succeeded
    Success {
        /// Trimmed translated text
        text: String,
    },
    /// Translation failed
    Failure {
        /// Failure category
        kind: ErrorKind,
        /// User-facing description
        message: String,
    },
}

impl TranslationResult {
    /// Whether the call succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success { .. })
    }

    /// Translated text, if the call succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            TranslationResult::Success { text } => Some(text),
            TranslationResult::Failure { .. } => None,
        }
    }

    /// Failure kind, if the call failed
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            TranslationResult::Success { .. } => None,
            TranslationResult::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<Result<String, TranslationError>> for TranslationResult {
    fn from(result: Result<String, TranslationError>) -> Self {
        match result {
            Ok(text) => TranslationResult::Success { text },
            Err(e) => TranslationResult::Failure {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}
