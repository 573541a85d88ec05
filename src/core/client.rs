//! Async Gemini translation client

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError, UNKNOWN_ERROR};
use crate::core::models::{TranslationRequest, TranslationResult};

/// Message shown when no API key has been supplied
pub const MISSING_KEY_MESSAGE: &str = "Please add your own Google AI Studio API key \
(https://aistudio.google.com/app/apikey) via GEMINI_API_KEY, --api-key or a config file.";

/// Message for 2xx bodies without a candidate text or error message
pub const INVALID_STRUCTURE_MESSAGE: &str = "Invalid API response structure.";

/// Translator backed by the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiTranslator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl GeminiTranslator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TranslationError::ConfigError { message: e.to_string() })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from defaults and environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::load(None, None)
            .map_err(|e| TranslationError::ConfigError { message: e.to_string() })?;
        Self::new(config)
    }

    /// Configuration this translator was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a single request, folding every failure into the result
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        let result = self.try_translate(request).await;
        if let Err(e) = &result {
            warn!("Translation to {} failed ({}): {}", request.target_language, e.kind(), e);
        }
        result.into()
    }

    /// Translate a single request
    pub async fn try_translate(&self, request: &TranslationRequest) -> Result<String> {
        if request.text.is_empty() {
            debug!("Empty input, skipping translation");
            return Ok(String::new());
        }

        if !self.config.is_configured() {
            return Err(TranslationError::ConfigError {
                message: MISSING_KEY_MESSAGE.to_string(),
            });
        }

        let translation = self.send_request(request).await?;
        info!(
            "Translated {} chars to {}",
            request.text.chars().count(),
            request.target_language
        );
        Ok(translation)
    }

    /// Send actual HTTP request
    async fn send_request(&self, request: &TranslationRequest) -> Result<String> {
        let url = self.config.generate_content_url();
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": request.prompt() }]
            }]
        });

        debug!("POST {} (model {})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: describe_transport_error(e),
            })?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            let message = error_message(&error_text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status_code.to_string())
            });

            return Err(TranslationError::ApiError {
                status: status_code,
                message,
            });
        }

        let bytes = response.bytes().await.map_err(|e| TranslationError::NetworkError {
            message: describe_transport_error(e),
        })?;
        let json: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| TranslationError::InvalidResponseError {
                message: format!("Invalid JSON in response: {}", e),
            })?;

        extract_translation(&json)
    }
}

/// Pull the first candidate's text out of a `generateContent` response
pub fn extract_translation(json: &serde_json::Value) -> Result<String> {
    let text = json["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].get(0))
        .and_then(|p| p["text"].as_str())
        .filter(|t| !t.is_empty());

    if let Some(text) = text {
        return Ok(text.trim().to_string());
    }

    let message = json["message"]
        .as_str()
        .filter(|m| !m.is_empty())
        .or_else(|| json["error"]["message"].as_str().filter(|m| !m.is_empty()));

    match message {
        Some(message) => Err(TranslationError::ErrorPayload {
            message: message.to_string(),
        }),
        None => {
            debug!("Unexpected API response: {}", json);
            Err(TranslationError::InvalidResponseError {
                message: INVALID_STRUCTURE_MESSAGE.to_string(),
            })
        }
    }
}

/// `error.message` from an error body, if it parses
fn error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json["error"]["message"]
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn describe_transport_error(e: reqwest::Error) -> String {
    // Display includes the request URL, which carries the key
    let message = e.without_url().to_string();
    if message.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_translator_creation() {
        let translator = GeminiTranslator::new(TranslatorConfig::default());
        assert!(translator.is_ok());
    }

    #[test]
    fn test_translator_rejects_invalid_config() {
        let config = TranslatorConfig {
            model: "".to_string(),
            ..Default::default()
        };
        let err = GeminiTranslator::new(config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_placeholder_key_short_circuits() {
        let translator = GeminiTranslator::new(TranslatorConfig::default()).unwrap();
        let result = translator
            .translate(&TranslationRequest::new("Hello", "Hindi"))
            .await;

        assert_eq!(result.kind(), Some(ErrorKind::Configuration));
    }

    #[tokio::test]
    async fn test_empty_text_is_noop() {
        let translator = GeminiTranslator::new(TranslatorConfig::default()).unwrap();
        let text = translator
            .try_translate(&TranslationRequest::new("", "Hindi"))
            .await
            .unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_extract_translation_trims() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "\n  नमस्ते  \n" }] } }]
        });
        assert_eq!(extract_translation(&body).unwrap(), "नमस्ते");
    }

    #[test]
    fn test_extract_translation_uses_first_candidate() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        });
        assert_eq!(extract_translation(&body).unwrap(), "first");
    }

    #[test]
    fn test_extract_translation_message_field() {
        let body = json!({ "message": "Request blocked" });
        let err = extract_translation(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.to_string(), "Request blocked");

        let body = json!({ "error": { "message": "Model overloaded" } });
        assert_eq!(extract_translation(&body).unwrap_err().to_string(), "Model overloaded");
    }

    #[test]
    fn test_extract_translation_bad_structure() {
        let body = json!({ "candidates": [{ "content": { "parts": [] } }] });
        let err = extract_translation(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.to_string(), INVALID_STRUCTURE_MESSAGE);
    }

    #[test]
    fn test_extract_translation_empty_text_is_bad_structure() {
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] });
        let err = extract_translation(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.to_string(), INVALID_STRUCTURE_MESSAGE);
    }

    #[test]
    fn test_extract_translation_empty_message_is_bad_structure() {
        for body in [json!({ "message": "" }), json!({ "error": { "message": "" } })] {
            let err = extract_translation(&body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse);
            assert_eq!(err.to_string(), INVALID_STRUCTURE_MESSAGE);
        }
    }

    #[test]
    fn test_extract_translation_falls_back_to_error_message() {
        let body = json!({ "message": "", "error": { "message": "Model overloaded" } });
        let err = extract_translation(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.to_string(), "Model overloaded");
    }

    #[test]
    fn test_error_message_parsing() {
        assert_eq!(
            error_message(r#"{"error":{"message":"quota exceeded"}}"#).as_deref(),
            Some("quota exceeded")
        );
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(r#"{"error":{"message":""}}"#), None);
    }
}
