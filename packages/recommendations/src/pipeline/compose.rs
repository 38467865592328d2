//! Turns a raw candidate into an annotated recommendation.
//!
//! Pure function over (candidate, criteria): no I/O, no randomness.
//! Every output field ends up populated; missing upstream data gets a
//! default instead of leaking an absent value to the UI layer.

use crate::pipeline::{budget, proximity};
use crate::types::{
    AttractionDistance, HotelCandidate, HotelRecommendation, RecommendationCriteria,
};

/// Rating assumed when the provider has none.
const DEFAULT_RATING: f64 = 4.0;

/// Price tier assumed when the provider has none.
const DEFAULT_PRICE_LEVEL: u8 = 2;

/// Maximum amenity tags per recommendation.
const MAX_AMENITIES: usize = 6;

/// Itinerary locations considered for distance estimates.
const MAX_ATTRACTION_DISTANCES: usize = 3;

/// Amenity tags keyed by provider "types" entries.
const TYPE_AMENITIES: &[(&str, &str)] = &[
    ("spa", "Spa"),
    ("gym", "Academia"),
    ("restaurant", "Restaurante"),
    ("bar", "Bar"),
    ("lodging", "Estacionamento"),
    ("pool", "Piscina"),
    ("business_center", "Business center"),
];

/// Amenity tags keyed by travel style.
const STYLE_AMENITIES: &[(&str, &[&str])] = &[
    ("luxury", &["concierge", "room service"]),
    ("business", &["business center", "meeting room"]),
    ("family", &["pool", "kids area"]),
    ("romantic", &["spa", "romantic dinner"]),
];

/// Distance/walk-time estimates keyed by known area substrings.
const AREA_DISTANCES: &[(&str, &str, &str)] = &[
    ("copacabana", "0.5-2 km", "5-20 min"),
    ("ipanema", "0.5-2 km", "5-20 min"),
    ("leblon", "1-3 km", "10-30 min"),
    ("centro", "1-3 km", "10-30 min"),
    ("lapa", "1-3 km", "10-30 min"),
    ("barra", "5-15 km", "not walkable"),
];

/// Assemble a display-ready recommendation from a raw candidate.
pub fn compose(
    candidate: &HotelCandidate,
    criteria: &RecommendationCriteria,
) -> HotelRecommendation {
    let rating = candidate.rating.unwrap_or(DEFAULT_RATING);
    let review_count = candidate.user_ratings_total.unwrap_or(0);
    let price_level = candidate.price_level.unwrap_or(DEFAULT_PRICE_LEVEL);

    let proximity_score =
        proximity::score(candidate.location_text(), &criteria.itinerary_locations);
    let budget_match = budget::budget_matches(&criteria.budget, candidate.price_level);

    HotelRecommendation {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        address: candidate.address.clone(),
        rating,
        price_level,
        price_range: budget::price_range_label(price_level).to_string(),
        vicinity: candidate.location_text().to_string(),
        photo_urls: photo_urls(&candidate.photo_refs),
        amenities: amenities(&candidate.types, criteria),
        proximity_score,
        budget_match,
        reason: reason(rating, price_level, proximity_score, budget_match, criteria),
        attraction_distances: attraction_distances(&criteria.itinerary_locations),
        booking_url: booking_url(&candidate.name),
        review_count,
        highlights: highlights(rating, review_count, criteria),
    }
}

/// Derived amenity set: fixed base, then type-keyed, then style-keyed
/// additions. Order-stable dedup, capped at 6.
fn amenities(types: &[String], criteria: &RecommendationCriteria) -> Vec<String> {
    let mut result: Vec<String> = vec!["free Wi-Fi".to_string(), "air conditioning".to_string()];

    let mut push_unique = |result: &mut Vec<String>, tag: &str| {
        if !result.iter().any(|a| a == tag) {
            result.push(tag.to_string());
        }
    };

    for (type_tag, amenity) in TYPE_AMENITIES {
        if types.iter().any(|t| t == type_tag) {
            push_unique(&mut result, amenity);
        }
    }

    for (style, style_amenities) in STYLE_AMENITIES {
        if criteria.has_style(style) {
            for amenity in *style_amenities {
                push_unique(&mut result, amenity);
            }
        }
    }

    result.truncate(MAX_AMENITIES);
    result
}

/// Composed explanation of why this hotel was recommended. Display text
/// only; nothing downstream parses it.
fn reason(
    rating: f64,
    price_level: u8,
    proximity_score: u8,
    budget_match: bool,
    criteria: &RecommendationCriteria,
) -> String {
    let mut clauses: Vec<&str> = vec![];

    if budget_match {
        clauses.push("fits your budget");
    }
    if proximity_score > 30 {
        clauses.push("near your points of interest");
    }
    if rating >= 4.5 {
        clauses.push("excellent guest rating");
    } else if rating >= 4.0 {
        clauses.push("good guest rating");
    }
    if criteria.has_style("luxury") && price_level >= 3 {
        clauses.push("matches your luxury style");
    }
    if criteria.has_style("cultural") {
        clauses.push("ideal for exploring local culture");
    }

    if clauses.is_empty() {
        return "a solid option for your stay".to_string();
    }
    clauses.join("; ")
}

/// Estimates for the first few itinerary locations, looked up by known
/// area substrings. Unknown areas get a "calculating" placeholder pair
/// rather than a fabricated number.
fn attraction_distances(itinerary_locations: &[String]) -> Vec<AttractionDistance> {
    itinerary_locations
        .iter()
        .take(MAX_ATTRACTION_DISTANCES)
        .map(|location| {
            let lowered = location.to_lowercase();
            let estimate = AREA_DISTANCES
                .iter()
                .find(|(area, _, _)| lowered.contains(area));

            match estimate {
                Some((_, distance, walk_time)) => AttractionDistance {
                    attraction: location.clone(),
                    distance: (*distance).to_string(),
                    walk_time: (*walk_time).to_string(),
                },
                None => AttractionDistance {
                    attraction: location.clone(),
                    distance: "calculating".to_string(),
                    walk_time: "calculating".to_string(),
                },
            }
        })
        .collect()
}

/// Short display tags. Order-stable; no cap needed, the rule set is small.
fn highlights(rating: f64, review_count: u32, criteria: &RecommendationCriteria) -> Vec<String> {
    let mut result = vec![];
    if rating >= 4.5 {
        result.push("highly rated".to_string());
    }
    if review_count > 100 {
        result.push("many reviews".to_string());
    }
    if criteria.has_style("luxury") {
        result.push("premium experience".to_string());
    }
    if criteria.has_style("family") {
        result.push("family friendly".to_string());
    }
    result
}

/// Deterministic external search URL; there is no real booking
/// integration behind this.
fn booking_url(hotel_name: &str) -> String {
    format!(
        "https://www.booking.com/searchresults.html?ss={}",
        urlencoding::encode(hotel_name)
    )
}

fn photo_urls(photo_refs: &[String]) -> Vec<String> {
    photo_refs
        .iter()
        .map(|r| {
            format!(
                "https://maps.googleapis.com/maps/api/place/photo?maxwidth=800&photo_reference={}",
                r
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinates;

    fn candidate() -> HotelCandidate {
        HotelCandidate {
            id: "c1".to_string(),
            name: "Hotel Mar".to_string(),
            address: "Av. Atlântica 100".to_string(),
            location: Coordinates {
                lat: -22.97,
                lng: -43.18,
            },
            rating: Some(4.7),
            user_ratings_total: Some(320),
            price_level: Some(3),
            photo_refs: vec!["ref1".to_string()],
            types: vec!["lodging".to_string(), "spa".to_string()],
            vicinity: Some("Copacabana, Rio de Janeiro".to_string()),
        }
    }

    fn criteria() -> RecommendationCriteria {
        RecommendationCriteria::new("Rio de Janeiro", "2500")
            .with_styles(["luxury"])
            .with_locations(["Copacabana", "Ipanema"])
    }

    #[test]
    fn test_every_field_populated_with_sparse_candidate() {
        let sparse = HotelCandidate::new("c2", "Pousada Sem Dados");
        let rec = compose(&sparse, &RecommendationCriteria::default());

        assert_eq!(rec.rating, 4.0);
        assert_eq!(rec.review_count, 0);
        assert_eq!(rec.price_level, 2);
        assert_eq!(rec.price_range, "R$ 150-300");
        assert!(!rec.reason.is_empty());
        assert!(!rec.booking_url.is_empty());
        assert!(!rec.amenities.is_empty());
    }

    #[test]
    fn test_amenities_capped_at_six_and_deduplicated() {
        let mut c = candidate();
        c.types = vec![
            "spa".to_string(),
            "gym".to_string(),
            "restaurant".to_string(),
            "bar".to_string(),
            "lodging".to_string(),
            "pool".to_string(),
            "business_center".to_string(),
        ];
        let crit = criteria().with_styles(["luxury", "romantic"]);
        let rec = compose(&c, &crit);

        assert!(rec.amenities.len() <= 6);
        let mut deduped = rec.amenities.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), rec.amenities.len());
        // Base amenities always come first.
        assert_eq!(rec.amenities[0], "free Wi-Fi");
    }

    #[test]
    fn test_reason_mentions_budget_proximity_and_rating() {
        let rec = compose(&candidate(), &criteria());
        assert!(rec.reason.contains("fits your budget"));
        assert!(rec.reason.contains("near your points of interest"));
        assert!(rec.reason.contains("excellent guest rating"));
        assert!(rec.reason.contains("matches your luxury style"));
    }

    #[test]
    fn test_reason_falls_back_when_nothing_applies() {
        let mut c = candidate();
        c.rating = Some(3.2);
        c.price_level = Some(4);
        c.vicinity = Some("Nowhere".to_string());
        let crit = RecommendationCriteria::new("Rio", "100").with_locations(["Copacabana"]);
        let rec = compose(&c, &crit);

        assert_eq!(rec.reason, "a solid option for your stay");
    }

    #[test]
    fn test_attraction_distances_takes_first_three() {
        let crit = criteria().with_locations(["Copacabana", "Ipanema", "Lapa", "Leblon"]);
        let rec = compose(&candidate(), &crit);

        assert_eq!(rec.attraction_distances.len(), 3);
        assert_eq!(rec.attraction_distances[0].attraction, "Copacabana");
        assert_eq!(rec.attraction_distances[0].distance, "0.5-2 km");
    }

    #[test]
    fn test_unknown_attraction_gets_placeholder() {
        let crit = criteria().with_locations(["Eiffel Tower"]);
        let rec = compose(&candidate(), &crit);

        assert_eq!(rec.attraction_distances[0].distance, "calculating");
        assert_eq!(rec.attraction_distances[0].walk_time, "calculating");
    }

    #[test]
    fn test_highlights_rules() {
        let rec = compose(&candidate(), &criteria());
        assert!(rec.highlights.contains(&"highly rated".to_string()));
        assert!(rec.highlights.contains(&"many reviews".to_string()));
        assert!(rec.highlights.contains(&"premium experience".to_string()));
        assert!(!rec.highlights.contains(&"family friendly".to_string()));
    }

    #[test]
    fn test_booking_url_is_deterministic_and_encoded() {
        let rec = compose(&candidate(), &criteria());
        assert_eq!(
            rec.booking_url,
            "https://www.booking.com/searchresults.html?ss=Hotel%20Mar"
        );
    }
}
