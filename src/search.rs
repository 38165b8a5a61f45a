//! Wikipedia open-search queries and XML response parsing.

use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::{debug, info};

use crate::client::WikiClient;
use crate::error::{GeospotError, Result};
use crate::language::Language;

/// Smallest result count the open-search endpoint accepts
pub const MIN_LIMIT: u8 = 1;
/// Largest result count the open-search endpoint accepts
pub const MAX_LIMIT: u8 = 99;
/// Result count requested when the caller does not override it
pub const DEFAULT_LIMIT: u8 = 3;

/// A single open-search hit: article title and its canonical URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub title: String,
    pub url: String,
}

/// Parameters of one open-search request
#[derive(Debug, Clone)]
pub struct SearchQuery {
    term: String,
    language: Language,
    limit: u8,
}

impl SearchQuery {
    /// Create a query for the given term and language edition
    pub fn new<S: Into<String>>(term: S, language: Language) -> Self {
        Self {
            term: term.into(),
            language,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the result limit. Wikipedia accepts 1 through 99.
    pub fn with_limit(mut self, limit: u8) -> Result<Self> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(GeospotError::validation(format!(
                "limit {limit} is out of range, expected {MIN_LIMIT} to {MAX_LIMIT}"
            )));
        }
        self.limit = limit;
        Ok(self)
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn limit(&self) -> u8 {
        self.limit
    }

    fn endpoint_url(&self) -> String {
        format!(
            "https://{}/w/api.php?action=opensearch&search={}&format=xml&limit={}",
            self.language.wikipedia_host(),
            urlencoding::encode(&self.term),
            self.limit
        )
    }

    /// Run the query and return candidates in response order.
    /// An empty vector is a valid outcome.
    pub async fn execute(&self, client: &WikiClient) -> Result<Vec<SearchCandidate>> {
        info!(
            "Searching {} for '{}' (limit {})",
            self.language.wikipedia_host(),
            self.term,
            self.limit
        );

        let body = client.get_text(&self.endpoint_url()).await?;
        let candidates = parse_open_search(&body)?;

        debug!("Open search returned {} candidates", candidates.len());
        Ok(candidates)
    }
}

/// Open-search XML structure for deserialization
#[derive(Debug, Deserialize)]
struct SearchSuggestion {
    #[serde(rename = "Section")]
    section: Option<SearchSection>,
}

#[derive(Debug, Deserialize)]
struct SearchSection {
    #[serde(rename = "Item", default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "Text")]
    text: String,
    #[serde(rename = "Url")]
    url: String,
}

/// Parse an open-search XML response into candidates, preserving response
/// order. A response without a `Section` or without items yields an empty
/// vector.
pub fn parse_open_search(xml_content: &str) -> Result<Vec<SearchCandidate>> {
    let suggestion: SearchSuggestion = from_str(xml_content)
        .map_err(|e| GeospotError::parse(format!("Failed to parse open search XML: {e}")))?;

    let items = suggestion.section.map(|s| s.items).unwrap_or_default();

    Ok(items
        .into_iter()
        .map(|item| SearchCandidate {
            title: item.text,
            url: item.url,
        })
        .collect())
}
