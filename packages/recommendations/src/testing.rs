//! Testing utilities including mock client implementations.
//!
//! These let applications (and this crate's own integration tests)
//! exercise the engine without network calls: responses are configured
//! per query, failures are injectable, and every call is recorded for
//! assertions about the degrade chain.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{RecommendError, Result};
use crate::traits::{Geocoder, PlaceSearcher};
use crate::types::{Coordinates, HotelCandidate};

/// Record of a call made to a mock client.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Geocode { address: String },
    SearchNearby { keyword: Option<String> },
    SearchText { query: String },
}

/// A mock geocoder with per-address responses.
///
/// Addresses without a configured response fail with
/// [`RecommendError::Geocode`], which is exactly how the engine expects
/// an unresolvable destination to present.
#[derive(Default, Clone)]
pub struct MockGeocoder {
    responses: Arc<RwLock<HashMap<String, Coordinates>>>,
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure coordinates for an address.
    pub fn with_location(self, address: &str, lat: f64, lng: f64) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(address.to_string(), Coordinates { lat, lng });
        self
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates> {
        self.calls.write().unwrap().push(MockCall::Geocode {
            address: address.to_string(),
        });

        self.responses
            .read()
            .unwrap()
            .get(address)
            .copied()
            .ok_or_else(|| RecommendError::Geocode {
                address: address.to_string(),
            })
    }
}

/// A mock place searcher with configurable nearby and text results.
///
/// Nearby results are keyed by rounded coordinates so a test configures
/// them with the same values it gave the mock geocoder. Text results are
/// keyed by the exact query string. Either channel can be forced to fail.
#[derive(Default, Clone)]
pub struct MockPlaceSearcher {
    nearby: Arc<RwLock<HashMap<String, Vec<HotelCandidate>>>>,
    text: Arc<RwLock<HashMap<String, Vec<HotelCandidate>>>>,
    fail_nearby: Arc<RwLock<bool>>,
    fail_text: Arc<RwLock<bool>>,
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockPlaceSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure nearby results for coordinates.
    pub fn with_nearby(self, lat: f64, lng: f64, candidates: Vec<HotelCandidate>) -> Self {
        self.nearby
            .write()
            .unwrap()
            .insert(coord_key(lat, lng), candidates);
        self
    }

    /// Configure results for an exact text query.
    pub fn with_text(self, query: &str, candidates: Vec<HotelCandidate>) -> Self {
        self.text
            .write()
            .unwrap()
            .insert(query.to_string(), candidates);
        self
    }

    /// Make every nearby search fail.
    pub fn with_nearby_failing(self) -> Self {
        *self.fail_nearby.write().unwrap() = true;
        self
    }

    /// Make every text search fail.
    pub fn with_text_failing(self) -> Self {
        *self.fail_text.write().unwrap() = true;
        self
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PlaceSearcher for MockPlaceSearcher {
    async fn search_nearby(
        &self,
        coords: Coordinates,
        _radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<HotelCandidate>> {
        self.calls.write().unwrap().push(MockCall::SearchNearby {
            keyword: keyword.map(str::to_string),
        });

        if *self.fail_nearby.read().unwrap() {
            return Err(RecommendError::Search("nearby search down".into()));
        }

        Ok(self
            .nearby
            .read()
            .unwrap()
            .get(&coord_key(coords.lat, coords.lng))
            .cloned()
            .unwrap_or_default())
    }

    async fn search_text(&self, query: &str) -> Result<Vec<HotelCandidate>> {
        self.calls.write().unwrap().push(MockCall::SearchText {
            query: query.to_string(),
        });

        if *self.fail_text.read().unwrap() {
            return Err(RecommendError::Search("text search down".into()));
        }

        Ok(self
            .text
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

fn coord_key(lat: f64, lng: f64) -> String {
    format!("{lat:.4},{lng:.4}")
}

/// Candidate fixture with sensible defaults for tests.
pub fn candidate_fixture(id: &str, name: &str, vicinity: &str) -> HotelCandidate {
    HotelCandidate {
        id: id.to_string(),
        name: name.to_string(),
        address: format!("{vicinity} 100"),
        location: Coordinates { lat: 0.0, lng: 0.0 },
        rating: Some(4.3),
        user_ratings_total: Some(150),
        price_level: Some(2),
        photo_refs: vec![],
        types: vec!["lodging".to_string()],
        vicinity: Some(vicinity.to_string()),
    }
}
