//! Wire types for the maps provider API.
//!
//! The provider wraps every response in a `{status, results}` envelope.
//! Status `"OK"` means results are usable; `"ZERO_RESULTS"` is a valid
//! empty response for searches; anything else is a provider error.

use serde::Deserialize;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Envelope for geocoding responses.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// A single geocoding result. Only the geometry is consumed.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

/// Envelope for place search responses.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
}

/// Location geometry of a geocoding or place result.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

/// A candidate establishment from nearby or text search.
///
/// Ordering within a response is provider-defined; the client does not
/// re-sort.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    /// Provider price tier, 1 (budget) to 4 (premium).
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
}

/// Reference to a provider-hosted photo.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRef {
    pub photo_reference: String,
}
