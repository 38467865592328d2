//! Error types for the places client.

use thiserror::Error;

/// Result type for places client operations.
pub type Result<T> = std::result::Result<T, PlacesError>;

/// Places client errors.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network error (connection failed, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider reported a non-success status code in its envelope
    #[error("Provider error: {status}")]
    Api { status: String },

    /// Geocoding produced no usable result for the query
    #[error("No result for: {query}")]
    NotFound { query: String },

    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),
}
