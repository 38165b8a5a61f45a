//! Geospot - locate Wikipedia places and export their coordinates
//!
//! This library resolves search terms and article URLs against Wikipedia,
//! extracts geographic coordinates from article markup, and renders the
//! resolved spots as JSON, KML or a static map.

pub mod cli;
pub mod client;
pub mod coordinates;
pub mod error;
pub mod language;
pub mod output;
pub mod scrape;
pub mod search;
pub mod spot;

// Re-export core types for public API
pub use client::{ClientConfig, WikiClient};
pub use error::{GeospotError, Result};
pub use language::{CoordinateFormat, Language};
pub use scrape::{ScrapeRequest, ScrapedArticle};
pub use search::{SearchCandidate, SearchQuery};
pub use spot::{Spot, resolve_spots};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
