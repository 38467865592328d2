//! Keyword-proximity scoring between a candidate and itinerary locations.
//!
//! This is a textual heuristic, not a geometric one: no great-circle
//! distance is computed even though coordinates are available upstream.
//! A direct substring match scores high; known-adjacent neighborhoods
//! score a little lower. The sum is clamped to 100.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Points for a direct substring match with an itinerary location.
const DIRECT_MATCH_POINTS: u32 = 20;

/// Points per adjacency keyword found in the candidate's location text.
const ADJACENCY_POINTS: u32 = 15;

/// Maximum score after clamping.
pub const MAX_SCORE: u32 = 100;

/// Neighborhood adjacency table: an area name maps to the keyword set of
/// areas a traveler would consider walkably close to it.
static ADJACENT_AREAS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        (
            "copacabana",
            &["copacabana", "leme", "ipanema"] as &[&str],
        ),
        ("ipanema", &["ipanema", "leblon", "copacabana"]),
        ("leblon", &["leblon", "ipanema", "gávea"]),
        ("centro", &["centro", "lapa", "santa teresa"]),
        ("barra", &["barra da tijuca", "recreio"]),
        ("paulista", &["paulista", "jardins", "bela vista"]),
        ("paris", &["le marais", "latin quarter", "montmartre"]),
        ("montmartre", &["montmartre", "pigalle"]),
        ("marais", &["marais", "bastille"]),
    ])
});

/// Score how close `candidate_location` reads to the itinerary, 0-100.
///
/// For each itinerary location: +20 when either text contains the other
/// (case-insensitive), plus +15 per adjacency keyword present in the
/// candidate text when the location mentions a known area. Awards
/// accumulate across all locations and the total is clamped to 100, so
/// the score is monotonically non-decreasing in match count but capped.
pub fn score(candidate_location: &str, itinerary_locations: &[String]) -> u8 {
    let candidate = candidate_location.to_lowercase();
    let mut total: u32 = 0;

    for location in itinerary_locations {
        let location = location.to_lowercase();
        if location.is_empty() {
            continue;
        }

        let direct_match = candidate.contains(&location)
            || (!candidate.is_empty() && location.contains(&candidate));
        if direct_match {
            total += DIRECT_MATCH_POINTS;
        }

        for (area, neighbors) in ADJACENT_AREAS.iter() {
            if !location.contains(area) {
                continue;
            }
            for neighbor in *neighbors {
                if candidate.contains(neighbor) {
                    total += ADJACENCY_POINTS;
                }
            }
        }
    }

    total.min(MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn locations(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_direct_match_scores_at_least_twenty() {
        let score = score(
            "Copacabana, Rio de Janeiro",
            &locations(&["Copacabana", "Ipanema"]),
        );
        assert!(score >= 20, "got {score}");
    }

    #[test]
    fn test_adjacent_neighborhood_scores_without_direct_match() {
        // Candidate is in Leme; itinerary mentions Copacabana, which lists
        // Leme as adjacent.
        let score = score("Leme, Rio de Janeiro", &locations(&["Copacabana"]));
        assert!(score >= 15, "got {score}");
    }

    #[test]
    fn test_city_level_location_awards_neighborhood_adjacency() {
        // Itinerary says "Paris"; a candidate in Le Marais is adjacent
        // even though neither text contains the other.
        let score = score("Le Marais", &locations(&["Paris"]));
        assert!(score >= 15, "got {score}");
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        assert_eq!(score("Shibuya, Tokyo", &locations(&["Copacabana"])), 0);
    }

    #[test]
    fn test_overlapping_adjacency_clamps_at_one_hundred() {
        // Candidate text mentions every adjacent area so each itinerary
        // entry awards direct + multiple adjacency points.
        let candidate = "Copacabana Leme Ipanema Leblon";
        let many = locations(&["Copacabana", "Ipanema", "Leblon", "Copacabana", "Ipanema"]);
        assert_eq!(score(candidate, &many), 100);
    }

    #[test]
    fn test_empty_itinerary_scores_zero() {
        assert_eq!(score("Copacabana", &[]), 0);
    }

    #[test]
    fn test_score_non_decreasing_with_extra_match() {
        let base = locations(&["Ipanema"]);
        let more = locations(&["Ipanema", "Copacabana"]);
        let candidate = "Copacabana, Rio de Janeiro";
        assert!(score(candidate, &more) >= score(candidate, &base));
    }

    proptest! {
        #[test]
        fn prop_score_always_in_range(
            candidate in ".{0,60}",
            itinerary in prop::collection::vec(".{0,30}", 0..12),
        ) {
            let s = score(&candidate, &itinerary);
            prop_assert!(s <= 100);
        }
    }
}
