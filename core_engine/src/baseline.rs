//! Baseline reading sources.
//!
//! Where a feed record embeds no baseline, one is drawn from a
//! [`BaselineSource`] at load time and never regenerated. The seeded
//! generator here is a placeholder collaborator standing in for real sensor
//! data; the deterministic core never calls it after enrichment.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::regions::BaselineReading;

/// Supplies one baseline reading per raw record during enrichment.
pub trait BaselineSource {
    fn baseline_for(&mut self, index: usize) -> BaselineReading;
}

/// Seeded pseudo-random baselines matching the historical mock ranges:
/// air 50..450, water 10..110, soil 50..350.
#[derive(Debug, Clone)]
pub struct SeededBaselines {
    rng: SmallRng,
}

impl SeededBaselines {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BaselineSource for SeededBaselines {
    fn baseline_for(&mut self, _index: usize) -> BaselineReading {
        BaselineReading {
            air: self.rng.gen_range(50..450),
            water: self.rng.gen_range(10..110),
            soil: self.rng.gen_range(50..350),
        }
    }
}

/// Constant baseline for every record. Test collaborator.
#[derive(Debug, Clone, Copy)]
pub struct FixedBaselines {
    reading: BaselineReading,
}

impl FixedBaselines {
    pub const fn new(reading: BaselineReading) -> Self {
        Self { reading }
    }
}

impl BaselineSource for FixedBaselines {
    fn baseline_for(&mut self, _index: usize) -> BaselineReading {
        self.reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = SeededBaselines::new(42);
        let mut b = SeededBaselines::new(42);
        for index in 0..16 {
            assert_eq!(a.baseline_for(index), b.baseline_for(index));
        }
    }

    #[test]
    fn readings_stay_in_mock_ranges() {
        let mut source = SeededBaselines::new(7);
        for index in 0..256 {
            let reading = source.baseline_for(index);
            assert!((50..450).contains(&reading.air));
            assert!((10..110).contains(&reading.water));
            assert!((50..350).contains(&reading.soil));
        }
    }
}
