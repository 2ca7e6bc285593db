//! Region selection state.
//!
//! Two states: nothing selected, or one region selected together with the
//! simulated reading frozen at selection time. Later factor changes do not
//! touch an existing snapshot; re-selecting takes a fresh one.

use crate::regions::Region;
use crate::simulate::SimulatedReading;

/// A selected region plus its reading as of selection time.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    pub region: Region,
    pub reading: SimulatedReading,
}

/// Current selection, if any.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Option<SelectionSnapshot>,
}

impl SelectionState {
    /// Replace the selection with a fresh snapshot.
    pub fn select(&mut self, region: Region, reading: SimulatedReading) {
        self.current = Some(SelectionSnapshot { region, reading });
    }

    /// Clear unconditionally.
    pub fn deselect(&mut self) {
        self.current = None;
    }

    pub fn selected(&self) -> Option<&SelectionSnapshot> {
        self.current.as_ref()
    }

    pub fn is_selected(&self) -> bool {
        self.current.is_some()
    }
}
