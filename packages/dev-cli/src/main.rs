//! Developer CLI for exercising the recommendation engine against the
//! real maps provider.
//!
//! Needs `MAPS_API_KEY` in the environment (or a `.env` file).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recommendations::providers::PlacesProvider;
use recommendations::{ItineraryItem, RecommendationCriteria, RecommendationEngine};

#[derive(Parser)]
#[command(name = "dev", about = "Lodging recommendation dev harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flat recommendations for a destination
    Recommend {
        /// Destination, e.g. "Rio de Janeiro"
        destination: String,

        /// Total stay budget, e.g. 1500
        #[arg(long, default_value = "1500")]
        budget: String,

        /// Travel style tags (repeatable)
        #[arg(long = "style")]
        styles: Vec<String>,

        /// Itinerary location labels (repeatable)
        #[arg(long = "near")]
        locations: Vec<String>,
    },

    /// Per-city recommendations from an itinerary JSON file
    Cities {
        /// Path to a JSON array of {date, title, location, description}
        itinerary: std::path::PathBuf,

        #[arg(long, default_value = "1500")]
        budget: String,

        #[arg(long = "style")]
        styles: Vec<String>,

        #[arg(long, default_value_t = 2)]
        travelers: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recommendations=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let provider = PlacesProvider::from_env().context("Failed to build places provider")?;
    let engine = RecommendationEngine::new(provider.clone(), provider);

    match cli.command {
        Command::Recommend {
            destination,
            budget,
            styles,
            locations,
        } => {
            let criteria = RecommendationCriteria::new(destination, budget)
                .with_styles(styles)
                .with_locations(locations);

            let set = engine.recommendations(&criteria).await;
            println!("source: {:?}", set.source);
            for hotel in &set.hotels {
                println!(
                    "{:>3} {} {} [{}] {}",
                    hotel.proximity_score,
                    if hotel.budget_match { "✓" } else { "✗" },
                    hotel.name,
                    hotel.price_range,
                    hotel.reason,
                );
            }
        }

        Command::Cities {
            itinerary,
            budget,
            styles,
            travelers,
        } => {
            let raw = std::fs::read_to_string(&itinerary)
                .with_context(|| format!("Failed to read {}", itinerary.display()))?;
            let items: Vec<ItineraryItem> =
                serde_json::from_str(&raw).context("Failed to parse itinerary JSON")?;

            let cities = engine
                .city_recommendations(&items, &budget, &styles, "", travelers)
                .await
                .context("City recommendations failed")?;

            for city in &cities {
                println!(
                    "== {} ({} days, {} -> {}) - stay near {}",
                    city.city, city.stay_duration, city.check_in, city.check_out,
                    city.recommended_area,
                );
                for hotel in &city.hotels {
                    println!("   {} [{}] {}", hotel.name, hotel.price_range, hotel.reason);
                }
            }
        }
    }

    Ok(())
}
