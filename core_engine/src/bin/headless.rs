//! Headless driver for manual inspection.
//!
//! Loads the bundled sample feed, prints the per-region tier table at the
//! neutral factors, applies a demonstration multiplier sweep, and prints the
//! recomputed table. No rendering, no interactivity.

use tracing::info;

use core_engine::{
    CauseCategory, PollutionEngine, SeededBaselines, SeverityTier,
};
use feed_schema::parse_feature_set;

const SAMPLE_FEED: &str = include_str!("../data/sample_wards.json");
const BASELINE_SEED: u64 = 0x00de_1417;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut engine = PollutionEngine::from_env()?;
    let feed = parse_feature_set(SAMPLE_FEED)?;
    let records: Vec<_> = feed
        .features
        .into_iter()
        .map(|feature| feature.properties)
        .collect();
    let mut baselines = SeededBaselines::new(BASELINE_SEED);
    let count = engine.load_regions(&records, &mut baselines)?;
    info!(regions = count, "sample feed loaded");

    print_tables(&engine, "neutral factors");

    // Demonstration sweep: a heavy burning season with cleaner waterways.
    engine.update_multiplier("stubble_burning", 2.8)?;
    engine.update_multiplier("vehicle_exhaust", 1.6)?;
    engine.update_multiplier("industrial_effluent", 0.5)?;
    engine.update_multiplier("pesticide_use", 2.0)?;

    let factors = engine.factors();
    info!(
        air = %factors.air,
        water = %factors.water,
        soil = %factors.soil,
        "sweep applied"
    );
    print_tables(&engine, "after sweep");

    if engine.select("Rohini") {
        if let Some(snapshot) = engine.selection() {
            println!(
                "selected {} -> air {} / water {} / soil {} / toxicity {}",
                snapshot.region.id,
                snapshot.reading.air,
                snapshot.reading.water,
                snapshot.reading.soil,
                snapshot.reading.toxicity_score()
            );
        }
    }

    Ok(())
}

fn print_tables(engine: &PollutionEngine, label: &str) {
    println!("== {label} ==");
    for category in CauseCategory::variants() {
        let Some(rows) = engine.overlay(*category) else {
            println!("  [{category}] hidden");
            continue;
        };
        for row in rows {
            let tier = match row.tier {
                SeverityTier::NotPresent => "not present".to_string(),
                SeverityTier::Band(band) => format!("band {band}"),
            };
            println!(
                "  [{category}] {:<12} {:>6}  {tier}",
                row.region.id, row.value
            );
        }
    }
}
