//! CLI command definitions and handlers

use clap::Subcommand;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::languages::{self, DEFAULT_LANGUAGE, LANGUAGES};
use crate::generator::password::{MAX_LENGTH, MIN_LENGTH};

/// Commands for lingo-toolkit
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate English text with Gemini
    Translate {
        /// Text to translate (read from stdin if omitted)
        text: Option<String>,

        /// Target language, by name or code
        #[arg(short = 't', long = "to", default_value = DEFAULT_LANGUAGE)]
        target_lang: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported target languages
    Languages,

    /// Generate random strings
    Generate {
        /// Number of characters
        #[arg(
            short,
            long,
            default_value_t = 16,
            value_parser = clap::value_parser!(u8).range((MIN_LENGTH as i64)..=(MAX_LENGTH as i64))
        )]
        length: u8,

        /// Leave digits out of the pool
        #[arg(long)]
        no_numbers: bool,

        /// Leave symbols out of the pool
        #[arg(long)]
        no_symbols: bool,

        /// How many strings to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

/// Handle translate command
pub async fn handle_translate(
    text: Option<String>,
    target_lang: String,
    json: bool,
    api_key: Option<String>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    use crate::core::client::GeminiTranslator;
    use crate::core::config::TranslatorConfig;
    use crate::core::models::{TranslationRequest, TranslationResult};
    use indicatif::{ProgressBar, ProgressStyle};
    use tracing::info;

    let language = languages::find_language(&target_lang).ok_or_else(|| {
        anyhow::anyhow!(
            "Unsupported language '{}'. Choose one of: {}",
            target_lang,
            languages::language_names()
        )
    })?;

    let text = match text {
        Some(text) => text,
        None => read_text(std::io::stdin())?,
    };

    if text.trim().is_empty() {
        info!("Nothing to translate");
        return Ok(());
    }

    let config = TranslatorConfig::load(config_path.as_deref(), api_key.as_deref())?;

    if !config.is_configured() {
        eprintln!("⚠️  Configuration needed: no Gemini API key set.");
    }

    let translator = GeminiTranslator::new(config)?;
    let request = TranslationRequest::new(text, language.display_name);

    info!("Translating to {}", language.display_name);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Translating...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = translator.translate(&request).await;

    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match result {
        TranslationResult::Success { text } => {
            if !json {
                println!("{}", text);
            }
            Ok(())
        }
        TranslationResult::Failure { kind, message } => {
            anyhow::bail!("Translation failed ({}): {}", kind, message)
        }
    }
}

/// Read translation input, dropping the trailing line break left by pipes and editors
fn read_text<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
    buffer.truncate(trimmed);
    Ok(buffer)
}

/// Handle languages command
pub fn handle_languages() {
    for language in LANGUAGES {
        println!("{}", language);
    }
}

/// Handle generate command
pub fn handle_generate(
    length: u8,
    no_numbers: bool,
    no_symbols: bool,
    count: usize,
) -> anyhow::Result<()> {
    use crate::generator::{GeneratorConfig, PasswordGenerator};
    use tracing::debug;

    let config = GeneratorConfig::new(length as usize, !no_numbers, !no_symbols);
    debug!("Generating {} string(s) with {:?}", count, config);

    let mut generator = PasswordGenerator::new(config)?;
    for i in 0..count {
        if i > 0 {
            generator.regenerate();
        }
        println!("{}", generator.current());
    }

    Ok(())
}
