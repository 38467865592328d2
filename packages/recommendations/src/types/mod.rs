//! Domain types for the recommendation engine.

pub mod candidate;
pub mod city;
pub mod criteria;
pub mod recommendation;

pub use candidate::{Coordinates, HotelCandidate};
pub use city::{CityHotelRecommendation, CityStay, ItineraryItem};
pub use criteria::RecommendationCriteria;
pub use recommendation::{
    AttractionDistance, HotelRecommendation, RecommendationSet, ResultSource,
};
