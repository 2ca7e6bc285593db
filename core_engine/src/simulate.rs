//! Simulation evaluator.
//!
//! Applies the current aggregate factors to a region's baseline. Pure and
//! idempotent; nothing here is cached, so a reading always reflects the
//! factors it was computed from.

use crate::agents::CauseCategory;
use crate::factor::CategoryFactors;
use crate::regions::Region;
use crate::scalar::Scalar;

/// Simulated pollution values for one region under one set of factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedReading {
    pub air: i64,
    pub water: i64,
    pub soil: i64,
}

impl SimulatedReading {
    pub const fn get(&self, category: CauseCategory) -> i64 {
        match category {
            CauseCategory::Air => self.air,
            CauseCategory::Water => self.water,
            CauseCategory::Soil => self.soil,
        }
    }

    /// Composite health score: `floor(air * 0.5 + water * 3 + soil * 0.2)`.
    ///
    /// Collapses the three categories into the single number that ranks a
    /// region's overall toxicity. Water dominates by design: a poisoned
    /// supply outweighs equal nominal air or soil values. Computed in tenths
    /// so the floor applies to the sum, not to each term.
    pub const fn toxicity_score(&self) -> i64 {
        (self.air * 5 + self.water * 30 + self.soil * 2) / 10
    }
}

/// `floor(baseline * factor)` for one category.
pub fn simulate_category(region: &Region, category: CauseCategory, factor: Scalar) -> i64 {
    (Scalar::from_u32(region.baseline.get(category)) * factor).trunc_units()
}

/// Simulate all three categories for a region.
pub fn simulate(region: &Region, factors: &CategoryFactors) -> SimulatedReading {
    SimulatedReading {
        air: simulate_category(region, CauseCategory::Air, factors.air),
        water: simulate_category(region, CauseCategory::Water, factors.water),
        soil: simulate_category(region, CauseCategory::Soil, factors.soil),
    }
}
