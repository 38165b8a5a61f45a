//! Error types and handling for the geospot library

use thiserror::Error;

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GeospotError>;

/// Main error type for geospot
#[derive(Error, Debug)]
pub enum GeospotError {
    /// Input validation errors, raised before any network call
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Network and HTTP status errors
    #[error("Network error: {message}")]
    Network { message: String },

    /// Unparseable response data or coordinate text
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// The article exists but carries no coordinate markup
    #[error("No geographic coordinates in article: {title}")]
    NoGeoData { title: String },

    /// The search term produced zero candidates
    #[error("No search results for: {term}")]
    NoResults { term: String },

    /// Output encoding errors from the JSON and KML writers
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GeospotError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new no-geo-data error for the given article
    pub fn no_geo_data<S: Into<String>>(title: S) -> Self {
        Self::NoGeoData {
            title: title.into(),
        }
    }

    /// Create a new no-results error for the given search term
    pub fn no_results<S: Into<String>>(term: S) -> Self {
        Self::NoResults { term: term.into() }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GeospotError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            GeospotError::Network { .. } => {
                "Unable to reach the server. Please check your internet connection.".to_string()
            }
            GeospotError::Parse { message } => {
                format!("Could not interpret the response data: {message}")
            }
            GeospotError::NoGeoData { title } => {
                format!("The article '{title}' has no geographic coordinates.")
            }
            GeospotError::NoResults { term } => {
                format!("No Wikipedia articles found for '{term}'.")
            }
            GeospotError::Serialization { .. } => {
                "Failed to encode the output.".to_string()
            }
            GeospotError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
