//! The resolved geographic spot and its two construction paths.

use tracing::debug;

use crate::client::WikiClient;
use crate::error::{GeospotError, Result};
use crate::language::Language;
use crate::scrape::ScrapeRequest;
use crate::search::{SearchCandidate, SearchQuery};

/// An immutable resolved place: article title, source URL and decimal
/// coordinates. All fields are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    title: String,
    url: String,
    latitude: f64,
    longitude: f64,
    elevation: Option<f64>,
}

impl Spot {
    /// Build a spot directly from its fields
    #[must_use]
    pub fn new<T, U>(title: T, url: U, latitude: f64, longitude: f64, elevation: Option<f64>) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            title: title.into(),
            url: url.into(),
            latitude,
            longitude,
            elevation,
        }
    }

    /// Resolve a search term: run the query and follow its top candidate.
    /// Fails with a no-results error before any scrape attempt when the
    /// query comes back empty.
    pub async fn from_search(query: &SearchQuery, client: &WikiClient) -> Result<Spot> {
        let candidates = query.execute(client).await?;
        let top = top_candidate(candidates, query.term())?;

        debug!(
            "Top candidate for '{}': {} ({})",
            query.term(),
            top.title,
            top.url
        );

        let request = ScrapeRequest::new(top.url)?;
        Self::from_scrape(&request, client).await
    }

    /// Resolve an article URL by scraping its printable rendering
    pub async fn from_scrape(request: &ScrapeRequest, client: &WikiClient) -> Result<Spot> {
        let article = request.execute(client).await?;

        Ok(Spot {
            title: article.title,
            url: request.url().to_string(),
            latitude: article.latitude,
            longitude: article.longitude,
            elevation: article.elevation,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }
}

/// Classify each input token as an article URL or a search term and resolve
/// them in order. Resolution is strictly sequential and the first failure
/// aborts the run.
pub async fn resolve_spots(
    tokens: &[String],
    language: Language,
    client: &WikiClient,
) -> Result<Vec<Spot>> {
    let mut spots = Vec::with_capacity(tokens.len());

    for token in tokens {
        let spot = if is_article_url(token) {
            let request = ScrapeRequest::new(token.clone())?;
            Spot::from_scrape(&request, client).await?
        } else {
            let query = SearchQuery::new(token.clone(), language);
            Spot::from_search(&query, client).await?
        };
        spots.push(spot);
    }

    Ok(spots)
}

/// First candidate of a search response. An empty response is a no-results
/// error for the term; no scrape is attempted.
fn top_candidate(candidates: Vec<SearchCandidate>, term: &str) -> Result<SearchCandidate> {
    let Some(top) = candidates.into_iter().next() else {
        return Err(GeospotError::no_results(term));
    };
    Ok(top)
}

/// Anything with an http or https scheme is treated as an article URL and
/// must pass scrape validation; it never falls back to a search term.
fn is_article_url(token: &str) -> bool {
    token.starts_with("http://") || token.starts_with("https://")
}
