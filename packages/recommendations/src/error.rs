//! Typed errors for the recommendation engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep failures
//! strongly typed across the crate boundary.
//!
//! Propagation policy: geocoding and search failures are *internal* to the
//! pipeline. The engine catches them and moves down the degrade chain, so
//! they never escape `recommendations()`. The one error a caller must
//! handle is [`RecommendError::NoItinerary`], which has no meaningful
//! degrade path.

use thiserror::Error;

/// Result type for recommendation operations.
pub type Result<T> = std::result::Result<T, RecommendError>;

/// Errors that can occur while building recommendations.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The geocoding provider could not resolve an address
    #[error("geocoding failed for: {address}")]
    Geocode { address: String },

    /// The place search provider reported a failure
    #[error("place search failed: {0}")]
    Search(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Itinerary-based mode was invoked with an empty itinerary
    #[error("no itinerary items to build city recommendations from")]
    NoItinerary,

    /// Underlying provider client failure (transport, auth, quota)
    #[error("provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}
