//! Lingo Toolkit - Gemini-backed text translator and random string generator
//!
//! This library provides an asynchronous translation client for the Gemini
//! `generateContent` API and a configurable random string generator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod generator;

// Re-export key types for convenience
pub use crate::core::{
    client::GeminiTranslator,
    config::TranslatorConfig,
    errors::{ErrorKind, GeneratorError, TranslationError},
    languages::{find_language, LanguageOption, LANGUAGES},
    models::{TranslationRequest, TranslationResult},
};

pub use crate::generator::{generate, GeneratorConfig, PasswordGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
