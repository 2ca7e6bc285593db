//! Engine facade owning all mutable simulation state.
//!
//! Every mutation flows through the methods here: multiplier updates,
//! visibility toggles, selection, region loads. The cached category factors
//! are recomputed before any mutation method returns, so readers never
//! observe a factor that predates the board it was derived from.

use tracing::{debug, info, warn};

use feed_schema::RawRegionRecord;

use crate::agents::{AgentCatalog, CatalogError, CauseCategory};
use crate::baseline::BaselineSource;
use crate::classify::{classify, SeverityTier};
use crate::factor::CategoryFactors;
use crate::metrics::EngineMetrics;
use crate::multipliers::{AdjustError, MultiplierBoard};
use crate::regions::{LoadError, Region, RegionKind, RegionStore};
use crate::selection::{SelectionSnapshot, SelectionState};
use crate::simulate::{simulate, SimulatedReading};
use crate::visibility::CategoryVisibility;

/// One region's row in a category overlay.
#[derive(Debug, Clone, Copy)]
pub struct OverlayRow<'a> {
    pub region: &'a Region,
    pub value: i64,
    pub tier: SeverityTier,
}

/// The causal factor simulation and classification engine.
///
/// Single-threaded and synchronous: every recomputation happens inside the
/// mutation method that triggered it. Independent instances are fully
/// isolated, so parallel simulations (or tests) can coexist.
#[derive(Debug, Clone)]
pub struct PollutionEngine {
    catalog: AgentCatalog,
    board: MultiplierBoard,
    factors: CategoryFactors,
    store: RegionStore,
    visibility: CategoryVisibility,
    selection: SelectionState,
    metrics: EngineMetrics,
}

impl PollutionEngine {
    /// Engine over a validated catalog, with every multiplier at its
    /// default and no regions loaded.
    pub fn new(catalog: AgentCatalog) -> Self {
        let board = MultiplierBoard::new(&catalog);
        let factors = CategoryFactors::compute(&catalog, &board);
        Self {
            catalog,
            board,
            factors,
            store: RegionStore::new(),
            visibility: CategoryVisibility::default(),
            selection: SelectionState::default(),
            metrics: EngineMetrics::default(),
        }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(AgentCatalog::builtin())
    }

    /// Engine using the `CAUSAL_AGENTS_CONFIG` override when present.
    pub fn from_env() -> Result<Self, CatalogError> {
        Ok(Self::new(AgentCatalog::load_with_env_override()?))
    }

    /// One-shot region enrichment. All-or-nothing: on failure the store
    /// keeps whatever was loaded before (nothing, on the first attempt).
    pub fn load_regions<S: BaselineSource>(
        &mut self,
        records: &[RawRegionRecord],
        baselines: &mut S,
    ) -> Result<usize, LoadError> {
        match self.store.load(records, baselines) {
            Ok(count) => {
                self.metrics.region_loads += 1;
                info!(
                    target: "pollution::engine",
                    regions = count,
                    "regions.loaded"
                );
                Ok(count)
            }
            Err(err) => {
                self.metrics.failed_loads += 1;
                warn!(
                    target: "pollution::engine",
                    error = %err,
                    "regions.load_failed"
                );
                Err(err)
            }
        }
    }

    /// Set one agent's multiplier and recompute the category factors.
    ///
    /// Rejection leaves the board, the factors, and everything else exactly
    /// as they were.
    pub fn update_multiplier(&mut self, agent_id: &str, value: f32) -> Result<(), AdjustError> {
        if let Err(err) = self.board.set(agent_id, value) {
            self.metrics.rejected_updates += 1;
            debug!(
                target: "pollution::engine",
                agent = agent_id,
                value,
                error = %err,
                "multiplier.rejected"
            );
            return Err(err);
        }
        self.factors = CategoryFactors::compute(&self.catalog, &self.board);
        self.metrics.multiplier_updates += 1;
        debug!(
            target: "pollution::engine",
            agent = agent_id,
            value,
            air = %self.factors.air,
            water = %self.factors.water,
            soil = %self.factors.soil,
            "multiplier.updated"
        );
        Ok(())
    }

    /// Flip a category layer on or off, returning the new state.
    pub fn toggle_visibility(&mut self, category: CauseCategory) -> bool {
        self.metrics.visibility_toggles += 1;
        let visible = self.visibility.toggle(category);
        debug!(
            target: "pollution::engine",
            category = %category,
            visible,
            "visibility.toggled"
        );
        visible
    }

    /// Select a region by id, snapshotting its current simulated reading.
    ///
    /// Water regions, placeholder ids, and unknown ids are ineligible; the
    /// call is then a no-op returning `false` and the selection state
    /// machine self-loops.
    pub fn select(&mut self, region_id: &str) -> bool {
        let Some(region) = self.store.get(region_id) else {
            self.metrics.rejected_selections += 1;
            debug!(
                target: "pollution::engine",
                region = region_id,
                "selection.rejected=unknown"
            );
            return false;
        };
        if !region.is_selectable() {
            self.metrics.rejected_selections += 1;
            debug!(
                target: "pollution::engine",
                region = region_id,
                kind = region.kind.as_str(),
                "selection.rejected=ineligible"
            );
            return false;
        }
        let region = region.clone();
        let reading = simulate(&region, &self.factors);
        self.selection.select(region, reading);
        self.metrics.selections += 1;
        debug!(
            target: "pollution::engine",
            region = region_id,
            "selection.taken"
        );
        true
    }

    /// Clear the selection unconditionally.
    pub fn deselect(&mut self) {
        self.selection.deselect();
    }

    /// Current aggregate factors.
    pub fn factors(&self) -> CategoryFactors {
        self.factors
    }

    /// Simulate a region under the current factors. Pure read; never cached.
    pub fn simulated(&self, region: &Region) -> SimulatedReading {
        simulate(region, &self.factors)
    }

    /// Rows for one category's presentation layer, or `None` when the
    /// category is toggled off.
    ///
    /// Water regions carry no land readings and are excluded from the air
    /// and soil layers; air rows below the visibility floor are absent
    /// rather than lowest-severity.
    pub fn overlay(&self, category: CauseCategory) -> Option<Vec<OverlayRow<'_>>> {
        if !self.visibility.is_visible(category) {
            return None;
        }
        let rows = self
            .store
            .regions()
            .iter()
            .filter(|region| {
                category == CauseCategory::Water || region.kind == RegionKind::Land
            })
            .filter_map(|region| {
                let value = self.simulated(region).get(category);
                let tier = classify(category, value);
                tier.is_present().then_some(OverlayRow {
                    region,
                    value,
                    tier,
                })
            })
            .collect();
        Some(rows)
    }

    pub fn regions(&self) -> &[Region] {
        self.store.regions()
    }

    pub fn selection(&self) -> Option<&SelectionSnapshot> {
        self.selection.selected()
    }

    pub fn is_visible(&self, category: CauseCategory) -> bool {
        self.visibility.is_visible(category)
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn metrics(&self) -> EngineMetrics {
        self.metrics
    }
}
