//! Region enrichment and storage.
//!
//! Raw feed records are enriched exactly once into immutable [`Region`]s:
//! kind from the feed's water indicators, id from the prioritized candidate
//! name fields (placeholder sentinel when none resolves), baseline either
//! embedded in the record or drawn once from a [`BaselineSource`]. A failed
//! load never commits partial results.

use thiserror::Error;

use feed_schema::RawRegionRecord;

use crate::agents::CauseCategory;
use crate::baseline::BaselineSource;

/// Sentinel id for a region with no resolvable name. Placeholder regions are
/// kept in the store but never participate in interaction.
pub const PLACEHOLDER_ID: &str = "#";

/// Whether a region is land or a water body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Land,
    Water,
}

impl RegionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Land => "land",
            RegionKind::Water => "water",
        }
    }
}

/// Unmodified pollution values for a region, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineReading {
    pub air: u32,
    pub water: u32,
    pub soil: u32,
}

impl BaselineReading {
    pub const fn get(&self, category: CauseCategory) -> u32 {
        match category {
            CauseCategory::Air => self.air,
            CauseCategory::Water => self.water,
            CauseCategory::Soil => self.soil,
        }
    }
}

/// An enriched geographic region. Immutable after load.
#[derive(Debug, Clone)]
pub struct Region {
    pub id: String,
    pub kind: RegionKind,
    pub baseline: BaselineReading,
}

impl Region {
    /// Placeholder-id regions are excluded from interaction entirely.
    pub fn is_identified(&self) -> bool {
        self.id != PLACEHOLDER_ID
    }

    /// Eligible for selection: identified land regions only.
    pub fn is_selectable(&self) -> bool {
        self.kind == RegionKind::Land && self.is_identified()
    }
}

/// Error raised while enriching a raw feed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("record {index} carries a baseline above the supported range")]
    BaselineOutOfRange { index: usize },
}

/// Upper bound accepted for any embedded baseline component. Simulated
/// values must survive a 3.0x factor in 64-bit fixed point with headroom.
const MAX_EMBEDDED_BASELINE: u32 = 1_000_000;

/// Holds the enriched region list, populated by one-shot loads.
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: Vec<Region>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrich `records` and replace the store contents.
    ///
    /// All-or-nothing: on any error the store keeps its previous regions
    /// (empty if nothing was ever loaded). Baselines are drawn from
    /// `baselines` only for records that do not embed one, and only once.
    pub fn load<S: BaselineSource>(
        &mut self,
        records: &[RawRegionRecord],
        baselines: &mut S,
    ) -> Result<usize, LoadError> {
        let mut enriched = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let kind = if record.is_water() {
                RegionKind::Water
            } else {
                RegionKind::Land
            };
            let id = record
                .resolve_id()
                .unwrap_or_else(|| PLACEHOLDER_ID.to_string());
            let baseline = match record.baseline {
                Some(raw) => {
                    if raw.air > MAX_EMBEDDED_BASELINE
                        || raw.water > MAX_EMBEDDED_BASELINE
                        || raw.soil > MAX_EMBEDDED_BASELINE
                    {
                        return Err(LoadError::BaselineOutOfRange { index });
                    }
                    BaselineReading {
                        air: raw.air,
                        water: raw.water,
                        soil: raw.soil,
                    }
                }
                None => baselines.baseline_for(index),
            };
            enriched.push(Region { id, kind, baseline });
        }
        let count = enriched.len();
        self.regions = enriched;
        Ok(count)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        // The placeholder is shared by every unidentified region; it never
        // names a single one.
        if id == PLACEHOLDER_ID {
            return None;
        }
        self.regions.iter().find(|region| region.id == id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
