//! Static catalog of target languages

use serde::Serialize;
use std::fmt;

/// A selectable target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// ISO-style code, e.g. `zh-CN`
    pub code: &'static str,
    /// Name used in the instruction text
    pub display_name: &'static str,
    /// Flag emoji
    pub flag: &'static str,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.flag, self.display_name, self.code)
    }
}

/// Default selection
pub const DEFAULT_LANGUAGE: &str = "Hindi";

/// Supported languages, Indian-subcontinent first
pub const LANGUAGES: &[LanguageOption] = &[
    LanguageOption { code: "hi", display_name: "Hindi", flag: "🇮🇳" },
    LanguageOption { code: "mr", display_name: "Marathi", flag: "🇮🇳" },
    LanguageOption { code: "ta", display_name: "Tamil", flag: "🇮🇳" },
    LanguageOption { code: "te", display_name: "Telugu", flag: "🇮🇳" },
    LanguageOption { code: "bn", display_name: "Bengali", flag: "🇮🇳" },
    LanguageOption { code: "gu", display_name: "Gujarati", flag: "🇮🇳" },
    LanguageOption { code: "kn", display_name: "Kannada", flag: "🇮🇳" },
    LanguageOption { code: "ml", display_name: "Malayalam", flag: "🇮🇳" },
    LanguageOption { code: "pa", display_name: "Punjabi", flag: "🇮🇳" },
    LanguageOption { code: "ur", display_name: "Urdu", flag: "🇮🇳" },
    LanguageOption { code: "es", display_name: "Spanish", flag: "🇪🇸" },
    LanguageOption { code: "fr", display_name: "French", flag: "🇫🇷" },
    LanguageOption { code: "de", display_name: "German", flag: "🇩🇪" },
    LanguageOption { code: "ja", display_name: "Japanese", flag: "🇯🇵" },
    LanguageOption { code: "ru", display_name: "Russian", flag: "🇷🇺" },
    LanguageOption { code: "zh-CN", display_name: "Chinese (Simplified)", flag: "🇨🇳" },
];

/// Look up a language by code or display name, ignoring case
pub fn find_language(query: &str) -> Option<&'static LanguageOption> {
    let query = query.trim();
    LANGUAGES.iter().find(|lang| {
        lang.code.eq_ignore_ascii_case(query) || lang.display_name.eq_ignore_ascii_case(query)
    })
}

/// Comma-separated display names, for error messages
pub fn language_names() -> String {
    LANGUAGES
        .iter()
        .map(|lang| lang.display_name)
        .collect::<Vec<_>>()
        .join(", ")
}
