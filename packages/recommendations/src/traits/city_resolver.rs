//! City resolution for itinerary items.
//!
//! Segmentation needs a city label per item. The default implementation
//! scans a hard-coded pattern table, which cannot generalize to arbitrary
//! destinations; the trait exists so an alternate strategy (for example
//! true reverse-geocoding) can be substituted without touching the
//! segmentation algorithm.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ItineraryItem;

/// Resolves the city an itinerary item belongs to.
///
/// Returning `None` lets segmentation fall back to the item's location
/// field (first comma-delimited segment) and finally to a sentinel label.
pub trait CityResolver: Send + Sync {
    /// City label for `item`, if this resolver recognizes one.
    fn resolve(&self, item: &ItineraryItem) -> Option<String>;
}

/// Ordered (pattern, canonical city) table. First match wins.
static CITY_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"(?i)rio\s+de\s+janeiro|copacabana|ipanema|leblon|\bleme\b|maracan",
            "Rio de Janeiro",
        ),
        (r"(?i)s[ãa]o\s+paulo|paulista", "São Paulo"),
        (r"(?i)salvador|pelourinho", "Salvador"),
        (r"(?i)foz\s+do\s+igua[çc]u|igua[çc]u", "Foz do Iguaçu"),
        (r"(?i)gramado|canela", "Gramado"),
        (r"(?i)\bparis\b|eiffel|louvre|montmartre", "Paris"),
        (r"(?i)\blondon\b|londres", "London"),
        (r"(?i)new\s+york|manhattan|brooklyn", "New York"),
        (r"(?i)\btokyo\b|t[óo]quio|shibuya", "Tokyo"),
        (r"(?i)buenos\s+aires|recoleta", "Buenos Aires"),
        (r"(?i)lisbon|lisboa", "Lisbon"),
        (r"(?i)\brome\b|\broma\b|colosseum", "Rome"),
    ]
    .into_iter()
    .map(|(pattern, city)| (Regex::new(pattern).unwrap(), city))
    .collect()
});

/// Default resolver backed by the static pattern table.
///
/// Matches against the item's title, location, and description combined.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternCityResolver;

impl PatternCityResolver {
    pub fn new() -> Self {
        Self
    }
}

impl CityResolver for PatternCityResolver {
    fn resolve(&self, item: &ItineraryItem) -> Option<String> {
        let haystack = format!("{} {} {}", item.title, item.location, item.description);

        CITY_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(&haystack))
            .map(|(_, city)| (*city).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(title: &str, location: &str) -> ItineraryItem {
        ItineraryItem::new(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(), title)
            .with_location(location)
    }

    #[test]
    fn test_neighborhood_resolves_to_city() {
        let resolver = PatternCityResolver::new();
        let resolved = resolver.resolve(&item("Beach morning", "Copacabana"));
        assert_eq!(resolved.as_deref(), Some("Rio de Janeiro"));
    }

    #[test]
    fn test_landmark_in_title_resolves() {
        let resolver = PatternCityResolver::new();
        let resolved = resolver.resolve(&item("Visit the Eiffel Tower", ""));
        assert_eq!(resolved.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_first_match_wins_over_later_patterns() {
        let resolver = PatternCityResolver::new();
        // Mentions both Rio and Paris; Rio's pattern is earlier in the table.
        let resolved = resolver.resolve(&item("Fly from Ipanema to Paris", ""));
        assert_eq!(resolved.as_deref(), Some("Rio de Janeiro"));
    }

    #[test]
    fn test_unknown_place_is_none() {
        let resolver = PatternCityResolver::new();
        assert!(resolver.resolve(&item("Lunch", "Somewhere quiet")).is_none());
    }
}
