//! Annotated recommendation output types.

use serde::{Deserialize, Serialize};

/// Where a recommendation set came from.
///
/// The degrade chain is visible to callers: a UI can label `Synthetic`
/// results as estimates instead of presenting them as live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Coordinates resolved and nearby search succeeded.
    NearbySearch,
    /// Nearby search unavailable; free-text search supplied the candidates.
    TextSearch,
    /// Both searches failed; placeholder candidates were synthesized.
    Synthetic,
}

/// Estimated distance from a hotel to one itinerary attraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttractionDistance {
    pub attraction: String,
    /// Human-readable range, e.g. "0.5-2 km".
    pub distance: String,
    /// Human-readable walk time, e.g. "5-20 min".
    pub walk_time: String,
}

/// A fully annotated, scored candidate ready for display.
///
/// Created fresh per request and never mutated after construction. Every
/// field is populated: missing upstream data is defaulted, not forwarded
/// as an absent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelRecommendation {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Guest rating; defaults to 4.0 when the provider had none.
    pub rating: f64,
    /// Price tier 1-4; defaults to tier 2 when unknown.
    pub price_level: u8,
    /// Label from the fixed price-range set, e.g. "R$ 150-300".
    pub price_range: String,
    pub vicinity: String,
    pub photo_urls: Vec<String>,
    /// Derived amenity tags, at most 6.
    pub amenities: Vec<String>,
    /// Heuristic keyword-closeness score, 0-100.
    pub proximity_score: u8,
    /// Whether the stay budget covers this tier's estimated cost.
    pub budget_match: bool,
    /// Composed explanatory text; display only, never re-parsed.
    pub reason: String,
    /// Estimates for the first few itinerary locations.
    pub attraction_distances: Vec<AttractionDistance>,
    /// Deterministic external search URL keyed by hotel name.
    pub booking_url: String,
    /// Review count; defaults to 0 when unknown.
    pub review_count: u32,
    /// Short display tags, e.g. "highly rated".
    pub highlights: Vec<String>,
}

/// The ranked output of a flat recommendation request, tagged with the
/// degrade-chain stage that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub source: ResultSource,
    /// Sorted budget-match-first, proximity-desc; at most 6 entries.
    pub hotels: Vec<HotelRecommendation>,
}

impl RecommendationSet {
    /// True when the set was synthesized rather than searched.
    pub fn is_degraded(&self) -> bool {
        self.source == ResultSource::Synthetic
    }
}
