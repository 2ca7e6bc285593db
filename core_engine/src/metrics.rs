//! Observational counters for engine activity.

/// Running totals of engine operations since construction.
///
/// Purely observational; nothing reads these to make decisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineMetrics {
    pub multiplier_updates: u64,
    pub rejected_updates: u64,
    pub visibility_toggles: u64,
    pub selections: u64,
    pub rejected_selections: u64,
    pub region_loads: u64,
    pub failed_loads: u64,
}
