//! Place search trait for discovering lodging candidates.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Coordinates, HotelCandidate};

/// Lodging search over an external provider.
///
/// Candidate ordering is provider-defined; implementations must not
/// re-sort. Ranking is the engine's job. Zero results is `Ok(vec![])`,
/// never an error.
#[async_trait]
pub trait PlaceSearcher: Send + Sync {
    /// Search for lodging around `coords` within `radius_m` meters,
    /// optionally narrowed by a free-text `keyword`.
    async fn search_nearby(
        &self,
        coords: Coordinates,
        radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<HotelCandidate>>;

    /// Free-text lodging search, for when no coordinates are available.
    async fn search_text(&self, query: &str) -> Result<Vec<HotelCandidate>>;
}
