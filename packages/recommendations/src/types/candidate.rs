//! Raw lodging candidates as returned by place search.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A raw lodging search result, before scoring and annotation.
///
/// Owned transiently by the search step; downstream scoring only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelCandidate {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinates,
    /// Guest rating, 0-5. Absent when the provider has no reviews yet.
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    /// Price tier 1 (budget) to 4 (premium), when the provider knows it.
    pub price_level: Option<u8>,
    pub photo_refs: Vec<String>,
    /// Provider "types" tags, e.g. `["lodging", "spa"]`.
    pub types: Vec<String>,
    /// Neighborhood-level location text, e.g. "Copacabana, Rio de Janeiro".
    pub vicinity: Option<String>,
}

impl HotelCandidate {
    /// Minimal candidate for construction sites that fill fields in steps.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            location: Coordinates { lat: 0.0, lng: 0.0 },
            rating: None,
            user_ratings_total: None,
            price_level: None,
            photo_refs: vec![],
            types: vec![],
            vicinity: None,
        }
    }

    /// The best location text available: vicinity first, address otherwise.
    pub fn location_text(&self) -> &str {
        self.vicinity.as_deref().unwrap_or(&self.address)
    }
}
