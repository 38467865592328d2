//! City segmentation: partition an itinerary into per-city stay windows.
//!
//! Every itinerary item lands in exactly one city bucket. Duration is the
//! number of items assigned, a proxy for days rather than the true
//! calendar span.

use tracing::debug;

use crate::traits::CityResolver;
use crate::types::{CityStay, ItineraryItem};

/// Label for items whose city cannot be determined at all.
pub const FALLBACK_CITY: &str = "Main Destination";

/// Keywords that mark an activity inside a free-text description.
const ACTIVITY_KEYWORDS: &[&str] = &[
    "beach",
    "museum",
    "tour",
    "hike",
    "trail",
    "park",
    "market",
    "show",
    "restaurant",
    "nightlife",
    "shopping",
];

/// Group itinerary items into per-city stays, ordered by first visit.
///
/// Items are processed in stable date-ascending order. City resolution
/// tries the injected resolver first, then the first comma-delimited
/// segment of the item's location, then [`FALLBACK_CITY`].
pub fn group_by_city(items: &[ItineraryItem], resolver: &dyn CityResolver) -> Vec<CityStay> {
    let mut ordered: Vec<ItineraryItem> = items.to_vec();
    ordered.sort_by_key(|item| item.date);

    let mut stays: Vec<CityStay> = vec![];

    for item in ordered {
        let city = resolve_city(&item, resolver);
        let activities = extract_activities(&item);

        match stays.iter_mut().find(|stay| stay.city == city) {
            Some(stay) => {
                stay.check_out = item.date;
                stay.duration_days += 1;
                for activity in activities {
                    if !stay.activities.contains(&activity) {
                        stay.activities.push(activity);
                    }
                }
                stay.items.push(item);
            }
            None => {
                debug!(city = %city, "Opening city bucket");
                stays.push(CityStay {
                    city,
                    check_in: item.date,
                    check_out: item.date,
                    duration_days: 1,
                    activities,
                    items: vec![item],
                });
            }
        }
    }

    stays
}

fn resolve_city(item: &ItineraryItem, resolver: &dyn CityResolver) -> String {
    if let Some(city) = resolver.resolve(item) {
        return city;
    }

    let first_segment = item
        .location
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match first_segment {
        Some(segment) => segment.to_string(),
        None => FALLBACK_CITY.to_string(),
    }
}

/// Activity labels for one item: its title, its location, and any known
/// activity keyword found in the description.
fn extract_activities(item: &ItineraryItem) -> Vec<String> {
    let mut activities = vec![];

    if !item.title.trim().is_empty() {
        activities.push(item.title.trim().to_string());
    }
    if !item.location.trim().is_empty() {
        activities.push(item.location.trim().to_string());
    }

    let description = item.description.to_lowercase();
    for keyword in ACTIVITY_KEYWORDS {
        if description.contains(keyword) {
            activities.push((*keyword).to_string());
        }
    }

    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::city_resolver::PatternCityResolver;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn rio_paris_itinerary() -> Vec<ItineraryItem> {
        vec![
            ItineraryItem::new(day(1), "Beach day").with_location("Copacabana"),
            ItineraryItem::new(day(2), "Sugarloaf").with_location("Rio de Janeiro"),
            ItineraryItem::new(day(3), "Samba night").with_location("Lapa, Rio de Janeiro"),
            ItineraryItem::new(day(4), "Louvre").with_location("Paris"),
            ItineraryItem::new(day(5), "Eiffel Tower").with_location("Paris"),
        ]
    }

    #[test]
    fn test_partition_is_exact() {
        let items = rio_paris_itinerary();
        let stays = group_by_city(&items, &PatternCityResolver::new());

        assert_eq!(stays.len(), 2);
        let total: usize = stays.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_check_out_advances_to_last_item_date() {
        let stays = group_by_city(&rio_paris_itinerary(), &PatternCityResolver::new());

        let rio = &stays[0];
        assert_eq!(rio.city, "Rio de Janeiro");
        assert_eq!(rio.check_in, day(1));
        assert_eq!(rio.check_out, day(3));
        assert_eq!(rio.duration_days, 3);

        let paris = &stays[1];
        assert_eq!(paris.city, "Paris");
        assert_eq!(paris.duration_days, 2);
    }

    #[test]
    fn test_items_sorted_by_date_before_grouping() {
        let mut items = rio_paris_itinerary();
        items.reverse();
        let stays = group_by_city(&items, &PatternCityResolver::new());

        // First bucket is still the earliest city visited.
        assert_eq!(stays[0].city, "Rio de Janeiro");
        assert_eq!(stays[0].items[0].date, day(1));
    }

    #[test]
    fn test_unrecognized_location_falls_back_to_comma_segment() {
        let items = vec![
            ItineraryItem::new(day(1), "Dinner").with_location("Smallville, Kansas"),
        ];
        let stays = group_by_city(&items, &PatternCityResolver::new());
        assert_eq!(stays[0].city, "Smallville");
    }

    #[test]
    fn test_empty_location_falls_back_to_sentinel() {
        let items = vec![ItineraryItem::new(day(1), "Free morning")];
        let stays = group_by_city(&items, &PatternCityResolver::new());
        assert_eq!(stays[0].city, FALLBACK_CITY);
    }

    #[test]
    fn test_activity_extraction_includes_description_keywords() {
        let items = vec![ItineraryItem::new(day(1), "Morning out")
            .with_location("Copacabana")
            .with_description("Beach walk, then a street market and a museum visit")];
        let stays = group_by_city(&items, &PatternCityResolver::new());

        let activities = &stays[0].activities;
        assert!(activities.contains(&"Morning out".to_string()));
        assert!(activities.contains(&"Copacabana".to_string()));
        assert!(activities.contains(&"beach".to_string()));
        assert!(activities.contains(&"market".to_string()));
        assert!(activities.contains(&"museum".to_string()));
    }
}
