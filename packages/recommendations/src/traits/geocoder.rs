//! Geocoding trait for resolving place names to coordinates.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Coordinates;

/// Forward geocoding over an external provider.
///
/// Implementations return the single best match for the query. Failure to
/// resolve is an error, not an empty result; the engine treats it as a
/// signal to skip coordinate-based search and fall through to text search.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve free-text `address` to its best-match coordinates.
    async fn geocode(&self, address: &str) -> Result<Coordinates>;
}
