//! Causal factor simulation and classification engine.
//!
//! Maintains user-tunable causative-agent multipliers grouped by pollution
//! category, aggregates them into per-category factors, applies those to
//! per-region baseline readings, and classifies the simulated values into
//! severity tiers for presentation. Rendering, geometry, and transport are
//! external collaborators; the engine speaks regions, values, and tiers.

mod agents;
mod baseline;
mod classify;
mod engine;
mod factor;
pub mod metrics;
mod multipliers;
mod regions;
mod scalar;
mod selection;
mod simulate;
mod visibility;

pub use agents::{AgentCatalog, CatalogError, CausativeAgent, CauseCategory};
pub use baseline::{BaselineSource, FixedBaselines, SeededBaselines};
pub use classify::{classify, tier_count, SeverityTier};
pub use engine::{OverlayRow, PollutionEngine};
pub use factor::{aggregate, CategoryFactors};
pub use metrics::EngineMetrics;
pub use multipliers::{
    AdjustError, MultiplierBoard, DEFAULT_MULTIPLIER, MAX_MULTIPLIER, MIN_MULTIPLIER,
};
pub use regions::{
    BaselineReading, LoadError, Region, RegionKind, RegionStore, PLACEHOLDER_ID,
};
pub use scalar::Scalar;
pub use selection::{SelectionSnapshot, SelectionState};
pub use simulate::{simulate, simulate_category, SimulatedReading};
pub use visibility::CategoryVisibility;
