//! Aggregation of agent multipliers into per-category factors.

use crate::agents::{AgentCatalog, CauseCategory};
use crate::multipliers::{MultiplierBoard, DEFAULT_MULTIPLIER};
use crate::scalar::Scalar;

/// Weighted-average multiplier for one category.
///
/// `Σ(multiplier_i * weight_i) / Σ(weight_i)` over the category's agents.
/// Weights need not sum to 1; dividing by the total normalizes them. As a
/// convex combination of bounded multipliers the result stays within
/// `[0.5, 3.0]`.
pub fn aggregate(catalog: &AgentCatalog, category: CauseCategory, board: &MultiplierBoard) -> Scalar {
    let agents = catalog.agents_for(category);
    let mut weighted = Scalar::zero();
    let mut total = Scalar::zero();
    for agent in agents {
        let multiplier = board.get(&agent.id).unwrap_or(DEFAULT_MULTIPLIER);
        weighted += multiplier * agent.weight;
        total += agent.weight;
    }
    // Zero total weight is unreachable past catalog validation.
    debug_assert!(total.is_positive(), "category {category} has zero weight");
    weighted / total
}

/// Snapshot of the three category factors at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFactors {
    pub air: Scalar,
    pub water: Scalar,
    pub soil: Scalar,
}

impl CategoryFactors {
    /// Recompute all three factors from the current board.
    pub fn compute(catalog: &AgentCatalog, board: &MultiplierBoard) -> Self {
        Self {
            air: aggregate(catalog, CauseCategory::Air, board),
            water: aggregate(catalog, CauseCategory::Water, board),
            soil: aggregate(catalog, CauseCategory::Soil, board),
        }
    }

    /// Factors with every category at the neutral 1.0.
    pub fn neutral() -> Self {
        Self {
            air: Scalar::one(),
            water: Scalar::one(),
            soil: Scalar::one(),
        }
    }

    pub fn get(&self, category: CauseCategory) -> Scalar {
        match category {
            CauseCategory::Air => self.air,
            CauseCategory::Water => self.water,
            CauseCategory::Soil => self.soil,
        }
    }
}
