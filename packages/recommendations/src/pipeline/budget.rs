//! Budget classification and price-tier compatibility.
//!
//! Thresholds are calibration constants for a whole-stay budget in the
//! app's currency units, not a nightly rate. Budget parsing is permissive:
//! anything unparseable behaves as mid-tier (tier 2) instead of failing
//! the request.

/// Estimated stay cost per price tier, indexed by tier 1-4.
const TIER_COSTS: [u32; 4] = [150, 300, 500, 1000];

/// Cost assumed when a candidate has no price tier (tier-2 behaviour).
const DEFAULT_TIER_COST: u32 = 300;

/// Price-range display labels, indexed by tier 1-4.
const PRICE_LABELS: [&str; 4] = ["R$ 80-150", "R$ 150-300", "R$ 300-500", "R$ 500+"];

/// Classify a stay budget into a price tier 1-4.
pub fn classify_budget(budget: &str) -> u8 {
    let amount = parse_budget(budget);
    match amount {
        a if a < 800.0 => 1,
        a if a < 2000.0 => 2,
        a if a < 4000.0 => 3,
        _ => 4,
    }
}

/// Whether `budget` covers the estimated cost of a candidate's tier.
///
/// Missing tier falls back to the tier-2 estimate. Deterministic for a
/// given (budget, tier) pair.
pub fn budget_matches(budget: &str, price_level: Option<u8>) -> bool {
    parse_budget(budget) >= f64::from(tier_cost(price_level))
}

/// Display label for a price tier. Unknown tiers get the tier-2 label.
pub fn price_range_label(price_level: u8) -> &'static str {
    match price_level {
        1..=4 => PRICE_LABELS[(price_level - 1) as usize],
        _ => PRICE_LABELS[1],
    }
}

fn tier_cost(price_level: Option<u8>) -> u32 {
    match price_level {
        Some(tier @ 1..=4) => TIER_COSTS[(tier - 1) as usize],
        _ => DEFAULT_TIER_COST,
    }
}

/// Parse a budget string, stripping currency noise. Unparseable input
/// behaves as a tier-2 budget (the default tier cost).
fn parse_budget(budget: &str) -> f64 {
    let digits: String = budget
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits
        .parse::<f64>()
        .unwrap_or(f64::from(DEFAULT_TIER_COST))
}
