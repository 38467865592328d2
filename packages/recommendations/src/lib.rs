//! Lodging recommendation engine.
//!
//! Builds ranked, annotated hotel recommendations for a destination or a
//! whole multi-city itinerary. The ranking is deterministic scoring over
//! external place data - keyword proximity, budget-tier matching - not a
//! model.
//!
//! # Design
//!
//! - Clients are constructor-injected through the [`traits`] layer; there
//!   is no global configuration.
//! - Upstream failures degrade instead of erroring: nearby search falls
//!   back to text search, and flat mode falls back further to synthetic
//!   placeholders. The output's source tag says which stage answered.
//! - Given identical provider responses, output is deterministic.
//!
//! # Usage
//!
//! ```rust,ignore
//! use recommendations::{RecommendationCriteria, RecommendationEngine};
//! use recommendations::providers::PlacesProvider;
//!
//! let provider = PlacesProvider::from_env()?;
//! let engine = RecommendationEngine::new(provider.clone(), provider);
//!
//! let criteria = RecommendationCriteria::new("Rio de Janeiro", "1500")
//!     .with_styles(["family"])
//!     .with_locations(["Copacabana", "Ipanema"]);
//!
//! let set = engine.recommendations(&criteria).await;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Client abstractions (Geocoder, PlaceSearcher, CityResolver)
//! - [`types`] - Criteria, candidates, recommendations, city stays
//! - [`pipeline`] - Scoring, composition, segmentation, orchestration
//! - [`testing`] - Mock clients for tests
//! - [`providers`] - Real client adapters (feature `places`)

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "places")]
pub mod providers;

// Re-export core types at crate root
pub use error::{RecommendError, Result};
pub use pipeline::{RecommendationEngine, CITY_LIMIT, DESTINATION_RADIUS_M, FLAT_LIMIT};
pub use traits::{city_resolver::PatternCityResolver, CityResolver, Geocoder, PlaceSearcher};
pub use types::{
    AttractionDistance, CityHotelRecommendation, CityStay, Coordinates, HotelCandidate,
    HotelRecommendation, ItineraryItem, RecommendationCriteria, RecommendationSet, ResultSource,
};
