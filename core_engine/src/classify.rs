//! Severity classification.
//!
//! Maps a simulated value to a discrete tier per category. Thresholds are
//! fixed; evaluation is "highest threshold strictly exceeded wins", falling
//! back to the lowest tier. Air carries a distinguished `NotPresent` tier
//! below its visibility floor: such a region drops out of the air layer
//! entirely rather than rendering at lowest severity.

use crate::agents::CauseCategory;

/// Ordinal severity classification.
///
/// `NotPresent` orders below every band; higher band indices are more
/// severe. Only air can produce `NotPresent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityTier {
    NotPresent,
    Band(u8),
}

impl SeverityTier {
    pub const fn is_present(&self) -> bool {
        matches!(self, SeverityTier::Band(_))
    }
}

const SOIL_BANDS: [i64; 3] = [120, 200, 280];
const WATER_BANDS: [i64; 4] = [30, 50, 80, 150];
const AIR_VISIBILITY_FLOOR: i64 = 100;
const AIR_BANDS: [i64; 4] = [200, 300, 400, 600];

fn band_index(bands: &[i64], value: i64) -> u8 {
    bands.iter().filter(|threshold| value > **threshold).count() as u8
}

/// Classify a simulated value. Arbitrarily large inputs clamp to the top
/// band for their category.
pub fn classify(category: CauseCategory, value: i64) -> SeverityTier {
    match category {
        CauseCategory::Soil => SeverityTier::Band(band_index(&SOIL_BANDS, value)),
        CauseCategory::Water => SeverityTier::Band(band_index(&WATER_BANDS, value)),
        CauseCategory::Air => {
            if value <= AIR_VISIBILITY_FLOOR {
                SeverityTier::NotPresent
            } else {
                SeverityTier::Band(band_index(&AIR_BANDS, value))
            }
        }
    }
}

/// Number of distinct tiers a category can produce, `NotPresent` included.
pub const fn tier_count(category: CauseCategory) -> usize {
    match category {
        CauseCategory::Soil => SOIL_BANDS.len() + 1,
        CauseCategory::Water => WATER_BANDS.len() + 1,
        CauseCategory::Air => AIR_BANDS.len() + 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_bands() {
        assert_eq!(classify(CauseCategory::Soil, 0), SeverityTier::Band(0));
        assert_eq!(classify(CauseCategory::Soil, 120), SeverityTier::Band(0));
        assert_eq!(classify(CauseCategory::Soil, 121), SeverityTier::Band(1));
        assert_eq!(classify(CauseCategory::Soil, 200), SeverityTier::Band(1));
        assert_eq!(classify(CauseCategory::Soil, 250), SeverityTier::Band(2));
        assert_eq!(classify(CauseCategory::Soil, 340), SeverityTier::Band(3));
    }

    #[test]
    fn water_bands() {
        assert_eq!(classify(CauseCategory::Water, 30), SeverityTier::Band(0));
        assert_eq!(classify(CauseCategory::Water, 31), SeverityTier::Band(1));
        assert_eq!(classify(CauseCategory::Water, 80), SeverityTier::Band(2));
        assert_eq!(classify(CauseCategory::Water, 81), SeverityTier::Band(3));
        assert_eq!(classify(CauseCategory::Water, 151), SeverityTier::Band(4));
    }

    #[test]
    fn air_floor_is_a_distinct_tier() {
        assert_eq!(classify(CauseCategory::Air, 0), SeverityTier::NotPresent);
        assert_eq!(classify(CauseCategory::Air, 75), SeverityTier::NotPresent);
        assert_eq!(classify(CauseCategory::Air, 100), SeverityTier::NotPresent);
        assert!(!classify(CauseCategory::Air, 100).is_present());
        // Baseline 120 at neutral factor: above the floor, below 200.
        assert_eq!(classify(CauseCategory::Air, 120), SeverityTier::Band(0));
        assert_eq!(classify(CauseCategory::Air, 201), SeverityTier::Band(1));
        assert_eq!(classify(CauseCategory::Air, 601), SeverityTier::Band(4));
    }

    #[test]
    fn huge_values_clamp_to_the_top_band() {
        assert_eq!(
            classify(CauseCategory::Air, i64::MAX),
            SeverityTier::Band(4)
        );
        assert_eq!(
            classify(CauseCategory::Soil, 1_000_000),
            SeverityTier::Band(3)
        );
        assert_eq!(
            classify(CauseCategory::Water, 1_000_000),
            SeverityTier::Band(4)
        );
    }

    #[test]
    fn classification_is_monotonic() {
        for category in CauseCategory::variants() {
            let mut previous = classify(*category, 0);
            for value in 1..700 {
                let tier = classify(*category, value);
                assert!(
                    tier >= previous,
                    "tier regressed at {category} value {value}"
                );
                previous = tier;
            }
        }
    }

    #[test]
    fn tier_counts_match_the_band_tables() {
        assert_eq!(tier_count(CauseCategory::Soil), 4);
        assert_eq!(tier_count(CauseCategory::Water), 5);
        assert_eq!(tier_count(CauseCategory::Air), 6);
    }
}
