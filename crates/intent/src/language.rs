//! Coarse language tag from character cues.

use serde::{Deserialize, Serialize};

/// Letters that only appear in Turkish text.
const TURKISH_MARKERS: [char; 12] = ['ğ', 'ş', 'ı', 'ö', 'ü', 'ç', 'Ğ', 'Ş', 'İ', 'Ö', 'Ü', 'Ç'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "tr")]
    Turkish,
    #[default]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Turkish when any marker letter is present, English otherwise.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| TURKISH_MARKERS.contains(&c)) {
            Language::Turkish
        } else {
            Language::English
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::English => "en",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "tr" => Language::Turkish,
            _ => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
