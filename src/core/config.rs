//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Sentinel meaning "no key configured"
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GOOGLE_AI_STUDIO_API_KEY_HERE";

/// Default Gemini REST base
pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Prefix for environment overrides, e.g. `GEMINI_API_KEY`
pub const ENV_PREFIX: &str = "GEMINI";

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Google AI Studio key, sent as the `key` query parameter
    pub api_key: String,
    /// REST base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub api_endpoint: String,
    /// Model name inserted into the `generateContent` path
    pub model: String,
    /// Client-wide request timeout; transport defaults apply when unset
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: None,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from defaults, an optional file, `GEMINI_*` variables
    /// and an explicit key override
    pub fn load(file: Option<&Path>, api_key: Option<&str>) -> anyhow::Result<Self> {
        Self::from_sources(file, Self::environment(), api_key)
    }

    /// `GEMINI_*` environment source
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    /// Load from explicit sources; later sources override earlier ones
    pub fn from_sources(
        file: Option<&Path>,
        environment: config::Environment,
        api_key: Option<&str>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api_key", PLACEHOLDER_API_KEY)?
            .set_default("api_endpoint", DEFAULT_API_ENDPOINT)?
            .set_default("model", DEFAULT_MODEL)?;

        if let Some(path) = file {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            debug!("Reading config file {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(environment);

        if let Some(api_key) = api_key {
            builder = builder.set_override("api_key", api_key)?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        if !config.is_configured() {
            warn!("Gemini API key is not configured; translation is disabled");
        }

        Ok(config)
    }

    /// Whether a real API key has been supplied
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }

    /// Full `generateContent` URL, without the key
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.trim().is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.model.trim().is_empty() {
            return Err(anyhow::anyhow!("Model is required"));
        }

        if self.timeout_ms == Some(0) {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}
