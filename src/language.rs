//! Supported Wikipedia language editions and their coordinate conventions.

use std::fmt;
use std::str::FromStr;

use crate::error::GeospotError;

/// A supported Wikipedia language edition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    De,
    En,
    Fr,
}

/// Textual coordinate convention used by a language edition's article markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateFormat {
    /// Degrees, minutes, seconds with a compass orientation
    Dms,
    /// Plain signed decimal degrees
    Decimal,
}

impl Language {
    /// All supported editions, in canonical order
    pub const ALL: [Language; 3] = [Language::De, Language::En, Language::Fr];

    /// The two-letter language code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Host name of this edition, e.g. `de.wikipedia.org`
    #[must_use]
    pub fn wikipedia_host(&self) -> String {
        format!("{}.wikipedia.org", self.code())
    }

    /// Match a host name back to its edition
    #[must_use]
    pub fn from_wikipedia_host(host: &str) -> Option<Language> {
        Self::ALL
            .iter()
            .copied()
            .find(|language| language.wikipedia_host() == host)
    }

    /// How this edition writes coordinates in article markup
    #[must_use]
    pub fn coordinate_format(&self) -> CoordinateFormat {
        match self {
            Language::En => CoordinateFormat::Dms,
            Language::De | Language::Fr => CoordinateFormat::Decimal,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = GeospotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(GeospotError::validation(format!(
                "unsupported language '{other}', expected one of: de, en, fr"
            ))),
        }
    }
}
