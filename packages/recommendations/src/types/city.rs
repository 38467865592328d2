//! Itinerary items and per-city segmentation types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recommendation::HotelRecommendation;

/// One entry of a trip itinerary, as supplied by the itinerary store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

impl ItineraryItem {
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            location: String::new(),
            description: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A per-city stay window produced by segmentation.
///
/// Segmentation partitions the itinerary exactly: every item lands in one
/// bucket, none are dropped or duplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityStay {
    pub city: String,
    /// Items assigned to this city, in date order.
    pub items: Vec<ItineraryItem>,
    /// Activity labels extracted from the items.
    pub activities: Vec<String>,
    /// Date of the first item assigned.
    pub check_in: NaiveDate,
    /// Date of the last item assigned; advances on every insertion.
    pub check_out: NaiveDate,
    /// Item count, used as a stay-length proxy rather than the calendar
    /// span between check_in and check_out.
    pub duration_days: u32,
}

/// Hotel recommendations for one city of a multi-city trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityHotelRecommendation {
    pub city: String,
    /// Days of stay, at least 1.
    pub stay_duration: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nearby_activities: Vec<String>,
    /// Ranked hotels, at most 4 per city.
    pub hotels: Vec<HotelRecommendation>,
    /// Coarse text bucket, e.g. "0.5-1.5 km from your activities".
    pub average_distance: String,
    /// Suggested area to stay in, e.g. the most visited location label.
    pub recommended_area: String,
}
