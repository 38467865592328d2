//! Maps-provider implementation of the engine's client traits.
//!
//! Wraps [`places_client::PlacesClient`] and converts its wire types and
//! errors into the engine's domain types.
//!
//! # Example
//!
//! ```rust,ignore
//! use recommendations::providers::PlacesProvider;
//!
//! let provider = PlacesProvider::from_env()?;
//! let engine = RecommendationEngine::new(provider.clone(), provider);
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use places_client::{PlacesClient, PlacesError, PlaceSummary};

use crate::error::{RecommendError, Result};
use crate::traits::{Geocoder, PlaceSearcher};
use crate::types::{Coordinates, HotelCandidate};

/// Lodging place type passed to nearby search.
const LODGING_TYPE: &str = "lodging";

/// Adapter over the shared places client. Cheap to clone; both engine
/// slots can hold the same underlying client.
#[derive(Clone)]
pub struct PlacesProvider {
    client: Arc<PlacesClient>,
}

impl PlacesProvider {
    pub fn new(client: PlacesClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Build from the `MAPS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let client = PlacesClient::from_env().map_err(to_provider_error)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Geocoder for PlacesProvider {
    async fn geocode(&self, address: &str) -> Result<Coordinates> {
        let coords = self.client.geocode(address).await.map_err(|e| match e {
            PlacesError::NotFound { .. } | PlacesError::Api { .. } => RecommendError::Geocode {
                address: address.to_string(),
            },
            other => to_provider_error(other),
        })?;

        Ok(Coordinates {
            lat: coords.lat,
            lng: coords.lng,
        })
    }
}

#[async_trait]
impl PlaceSearcher for PlacesProvider {
    async fn search_nearby(
        &self,
        coords: Coordinates,
        radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<HotelCandidate>> {
        let summaries = self
            .client
            .search_nearby(
                places_client::Coordinates {
                    lat: coords.lat,
                    lng: coords.lng,
                },
                radius_m,
                LODGING_TYPE,
                keyword,
            )
            .await
            .map_err(|e| RecommendError::Search(Box::new(e)))?;

        Ok(summaries.into_iter().map(to_candidate).collect())
    }

    async fn search_text(&self, query: &str) -> Result<Vec<HotelCandidate>> {
        let summaries = self
            .client
            .search_text(query)
            .await
            .map_err(|e| RecommendError::Search(Box::new(e)))?;

        Ok(summaries.into_iter().map(to_candidate).collect())
    }
}

fn to_candidate(summary: PlaceSummary) -> HotelCandidate {
    HotelCandidate {
        id: summary.place_id,
        name: summary.name,
        address: summary.formatted_address.unwrap_or_default(),
        location: Coordinates {
            lat: summary.geometry.location.lat,
            lng: summary.geometry.location.lng,
        },
        rating: summary.rating,
        user_ratings_total: summary.user_ratings_total,
        price_level: summary.price_level,
        photo_refs: summary
            .photos
            .into_iter()
            .map(|p| p.photo_reference)
            .collect(),
        types: summary.types,
        vicinity: summary.vicinity,
    }
}

fn to_provider_error(e: PlacesError) -> RecommendError {
    RecommendError::Provider(Box::new(e))
}
