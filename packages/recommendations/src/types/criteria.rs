//! Input criteria for a recommendation request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the traveler is looking for. Immutable input to a single
/// recommendation request; never persisted.
///
/// `budget` is kept as the raw text the caller supplied. Parsing is
/// permissive: an unparseable budget falls back to mid-tier behaviour
/// rather than rejecting the request (see [`crate::pipeline::budget`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    /// Free-text destination, e.g. "Rio de Janeiro".
    pub destination: String,

    /// Total stay budget as entered by the traveler, e.g. "1500".
    pub budget: String,

    /// Style tags such as "luxury", "family", "business", "romantic",
    /// "cultural".
    pub travel_style: Vec<String>,

    /// Free-text preferences, forwarded to search as a keyword hint.
    pub preferences: String,

    /// Ordered location labels extracted from the itinerary.
    pub itinerary_locations: Vec<String>,

    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,

    /// Number of travelers.
    pub travelers: u32,
}

impl RecommendationCriteria {
    /// Create criteria for a destination with a budget.
    pub fn new(destination: impl Into<String>, budget: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            budget: budget.into(),
            travelers: 1,
            ..Default::default()
        }
    }

    /// Add travel style tags.
    pub fn with_styles(mut self, styles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.travel_style = styles.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Add itinerary location labels.
    pub fn with_locations(
        mut self,
        locations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.itinerary_locations = locations.into_iter().map(|l| l.into()).collect();
        self
    }

    /// Set free-text preferences.
    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = preferences.into();
        self
    }

    /// Set the stay window.
    pub fn with_dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
        self
    }

    /// True if any style tag equals `tag` (case-insensitive).
    pub fn has_style(&self, tag: &str) -> bool {
        self.travel_style.iter().any(|s| s.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_style_is_case_insensitive() {
        let criteria = RecommendationCriteria::new("Paris", "1500").with_styles(["Luxury"]);
        assert!(criteria.has_style("luxury"));
        assert!(!criteria.has_style("family"));
    }
}
