//! Pure maps-provider REST API client.
//!
//! A minimal client for a Google-Maps-style provider. Supports forward
//! geocoding, nearby place search, and free-text place search. No caching,
//! no retries: a failed call surfaces immediately so the caller can move to
//! its own fallback strategy.
//!
//! # Example
//!
//! ```rust,ignore
//! use places_client::PlacesClient;
//!
//! let client = PlacesClient::new("your-api-key".into());
//!
//! let coords = client.geocode("Copacabana, Rio de Janeiro").await?;
//! let hotels = client
//!     .search_nearby(coords, places_client::DESTINATION_RADIUS_M, "lodging", None)
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{PlacesError, Result};
pub use types::{Coordinates, PhotoRef, PlaceSummary};

use std::time::Duration;

use types::{GeocodeResponse, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Search radius for destination-level hotel search: 50 km.
pub const DESTINATION_RADIUS_M: u32 = 50_000;

/// HTTP client for the maps provider.
///
/// Holds the API key explicitly; construct one per configuration and pass it
/// where it is needed rather than reading globals.
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Create from the `MAPS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("MAPS_API_KEY")
            .map_err(|_| PlacesError::Config("MAPS_API_KEY not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Point the client at a different base URL (test servers, proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Per-request timeout (default 10s). A timed-out call is a transport
    /// error like any other; the client never retries.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a free-text address to coordinates. First result wins.
    pub async fn geocode(&self, address: &str) -> Result<Coordinates> {
        let url = format!(
            "{}/geocode/json?address={}&key={}",
            self.base_url,
            urlencoding::encode(address),
            self.api_key
        );

        tracing::debug!(address, "Geocoding address");

        let resp: GeocodeResponse = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?
            .json()
            .await?;

        if resp.status != "OK" {
            tracing::warn!(address, status = %resp.status, "Geocoding returned non-OK status");
            return Err(PlacesError::Api {
                status: resp.status,
            });
        }

        resp.results
            .first()
            .map(|r| r.geometry.location)
            .ok_or_else(|| PlacesError::NotFound {
                query: address.to_string(),
            })
    }

    /// Search for places of `place_type` around `coords`.
    ///
    /// Zero results is a valid outcome and returns an empty vector.
    pub async fn search_nearby(
        &self,
        coords: Coordinates,
        radius_m: u32,
        place_type: &str,
        keyword: Option<&str>,
    ) -> Result<Vec<PlaceSummary>> {
        let mut url = format!(
            "{}/place/nearbysearch/json?location={},{}&radius={}&type={}&key={}",
            self.base_url, coords.lat, coords.lng, radius_m, place_type, self.api_key
        );
        if let Some(keyword) = keyword {
            url.push_str(&format!("&keyword={}", urlencoding::encode(keyword)));
        }

        tracing::debug!(
            lat = coords.lat,
            lng = coords.lng,
            radius_m,
            place_type,
            "Nearby place search"
        );

        self.fetch_search(&url).await
    }

    /// Free-text place search, used when no coordinates are available.
    pub async fn search_text(&self, query: &str) -> Result<Vec<PlaceSummary>> {
        let url = format!(
            "{}/place/textsearch/json?query={}&key={}",
            self.base_url,
            urlencoding::encode(query),
            self.api_key
        );

        tracing::debug!(query, "Text place search");

        self.fetch_search(&url).await
    }

    async fn fetch_search(&self, url: &str) -> Result<Vec<PlaceSummary>> {
        let resp: SearchResponse = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .json()
            .await?;

        match resp.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                tracing::debug!(count = resp.results.len(), "Place search completed");
                Ok(resp.results)
            }
            other => {
                tracing::warn!(status = other, "Place search returned provider error");
                Err(PlacesError::Api {
                    status: other.to_string(),
                })
            }
        }
    }
}
