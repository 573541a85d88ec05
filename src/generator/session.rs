//! Stateful generator that regenerates whenever its parameters change

use tracing::{debug, warn};

use crate::core::errors::GeneratorError;
use crate::generator::password::{generate, GeneratorConfig};

/// Holds the current parameters and the most recent string
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
    current: String,
}

impl PasswordGenerator {
    /// Validate `config` and produce the first string
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let current = generate(&config)?;
        Ok(Self { config, current })
    }

    /// Current parameters
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Most recent string, for display or copy
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Fresh draw with the current parameters
    pub fn regenerate(&mut self) -> &str {
        // config was validated on the way in
        match generate(&self.config) {
            Ok(next) => self.current = next,
            Err(e) => warn!("Regeneration failed for {:?}: {}", self.config, e),
        }
        &self.current
    }

    /// Change the length; regenerates if it differs
    pub fn set_length(&mut self, length: usize) -> Result<&str, GeneratorError> {
        if length != self.config.length {
            let config = GeneratorConfig { length, ..self.config };
            self.apply(config)?;
        }
        Ok(&self.current)
    }

    /// Toggle digits; regenerates if it differs
    pub fn set_include_numbers(&mut self, include_numbers: bool) -> &str {
        if include_numbers != self.config.include_numbers {
            let config = GeneratorConfig { include_numbers, ..self.config };
            self.apply_valid(config);
        }
        &self.current
    }

    /// Toggle symbols; regenerates if it differs
    pub fn set_include_symbols(&mut self, include_symbols: bool) -> &str {
        if include_symbols != self.config.include_symbols {
            let config = GeneratorConfig { include_symbols, ..self.config };
            self.apply_valid(config);
        }
        &self.current
    }

    fn apply(&mut self, config: GeneratorConfig) -> Result<(), GeneratorError> {
        self.current = generate(&config)?;
        debug!("Generator config changed to {:?}", config);
        self.config = config;
        Ok(())
    }

    /// Toggles never touch the length, so the config stays valid
    fn apply_valid(&mut self, config: GeneratorConfig) {
        if let Err(e) = self.apply(config) {
            warn!("Generator config {:?} rejected: {}", config, e);
        }
    }
}
