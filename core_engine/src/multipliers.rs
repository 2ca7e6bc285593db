//! Per-agent multiplier state.
//!
//! One entry per agent id across all categories, each constrained to
//! `[0.5, 3.0]` and defaulting to `1.0`. Mutation happens only through
//! [`MultiplierBoard::set`], which rejects invalid requests without partial
//! effect.

use std::collections::HashMap;

use thiserror::Error;

use crate::agents::AgentCatalog;
use crate::scalar::Scalar;

/// Lower bound of a legal multiplier.
pub const MIN_MULTIPLIER: Scalar = Scalar::from_raw(500_000);
/// Upper bound of a legal multiplier.
pub const MAX_MULTIPLIER: Scalar = Scalar::from_raw(3_000_000);
/// The neutral multiplier applied to every agent at startup.
pub const DEFAULT_MULTIPLIER: Scalar = Scalar::from_raw(1_000_000);

/// Rejected multiplier adjustment.
#[derive(Debug, Error)]
pub enum AdjustError {
    #[error("multiplier {value} is outside [0.5, 3.0]")]
    OutOfRange { value: f32 },
    #[error("agent {0:?} is not in the catalog")]
    UnknownAgent(String),
}

/// Current multiplier per agent id.
#[derive(Debug, Clone)]
pub struct MultiplierBoard {
    values: HashMap<String, Scalar>,
}

impl MultiplierBoard {
    /// Board with every catalog agent at the neutral default.
    pub fn new(catalog: &AgentCatalog) -> Self {
        let values = catalog
            .agent_ids()
            .map(|id| (id.to_string(), DEFAULT_MULTIPLIER))
            .collect();
        Self { values }
    }

    /// Set an agent's multiplier. The board is untouched on rejection.
    pub fn set(&mut self, agent_id: &str, value: f32) -> Result<(), AdjustError> {
        let scaled = Scalar::from_f32(value);
        if scaled < MIN_MULTIPLIER || scaled > MAX_MULTIPLIER {
            return Err(AdjustError::OutOfRange { value });
        }
        match self.values.get_mut(agent_id) {
            Some(slot) => {
                *slot = scaled;
                Ok(())
            }
            None => Err(AdjustError::UnknownAgent(agent_id.to_string())),
        }
    }

    /// Current multiplier for an agent; defaults apply to every known agent,
    /// so `None` means the id is not in the catalog.
    pub fn get(&self, agent_id: &str) -> Option<Scalar> {
        self.values.get(agent_id).copied()
    }

    /// Restore every agent to the neutral default.
    pub fn reset(&mut self) {
        for slot in self.values.values_mut() {
            *slot = DEFAULT_MULTIPLIER;
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> MultiplierBoard {
        MultiplierBoard::new(&AgentCatalog::builtin())
    }

    #[test]
    fn defaults_to_neutral() {
        let board = board();
        assert_eq!(board.get("stubble_burning"), Some(DEFAULT_MULTIPLIER));
        assert_eq!(board.get("pesticide_use"), Some(DEFAULT_MULTIPLIER));
    }

    #[test]
    fn set_within_range() {
        let mut board = board();
        board
            .set("vehicle_exhaust", 2.5)
            .expect("legal value should be accepted");
        assert_eq!(board.get("vehicle_exhaust"), Some(Scalar::from_f32(2.5)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut board = board();
        board.set("vehicle_exhaust", 0.5).expect("lower bound");
        board.set("vehicle_exhaust", 3.0).expect("upper bound");
    }

    #[test]
    fn out_of_range_is_rejected_without_mutation() {
        let mut board = board();
        let err = board
            .set("vehicle_exhaust", 3.5)
            .expect_err("3.5 is outside the legal range");
        assert!(matches!(err, AdjustError::OutOfRange { .. }));
        assert_eq!(board.get("vehicle_exhaust"), Some(DEFAULT_MULTIPLIER));
    }

    #[test]
    fn unknown_agent_is_rejected() {
        let mut board = board();
        let err = board
            .set("mystery_agent", 1.2)
            .expect_err("unknown agent should be rejected");
        assert!(matches!(err, AdjustError::UnknownAgent(_)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut board = board();
        board.set("sewage_discharge", 2.0).expect("legal value");
        board.reset();
        assert_eq!(board.get("sewage_discharge"), Some(DEFAULT_MULTIPLIER));
    }
}
