//! The recommendation pipeline.
//!
//! Leaves first: [`proximity`] and [`budget`] are pure scoring helpers,
//! [`compose`] assembles one annotated recommendation, [`segmentation`]
//! partitions an itinerary into city stays, and [`engine`] orchestrates
//! the search chain over all of them.

pub mod budget;
pub mod compose;
pub mod engine;
pub mod proximity;
pub mod segmentation;

pub use engine::{RecommendationEngine, CITY_LIMIT, DESTINATION_RADIUS_M, FLAT_LIMIT};
