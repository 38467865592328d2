//! Core trait abstractions.
//!
//! The engine talks to external providers only through these traits, so
//! clients are constructor-injected and tests swap in the mocks from
//! [`crate::testing`] without touching network code.

pub mod city_resolver;
pub mod geocoder;
pub mod searcher;

pub use city_resolver::CityResolver;
pub use geocoder::Geocoder;
pub use searcher::PlaceSearcher;
