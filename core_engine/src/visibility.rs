//! Per-category layer visibility.

use crate::agents::CauseCategory;

/// Which category layers are currently shown. All visible by default.
/// Toggling affects presentation only; it never touches multipliers,
/// regions, or the selection.
#[derive(Debug, Clone, Copy)]
pub struct CategoryVisibility {
    air: bool,
    water: bool,
    soil: bool,
}

impl Default for CategoryVisibility {
    fn default() -> Self {
        Self {
            air: true,
            water: true,
            soil: true,
        }
    }
}

impl CategoryVisibility {
    pub const fn is_visible(&self, category: CauseCategory) -> bool {
        match category {
            CauseCategory::Air => self.air,
            CauseCategory::Water => self.water,
            CauseCategory::Soil => self.soil,
        }
    }

    /// Flip one category's visibility, returning the new value.
    pub fn toggle(&mut self, category: CauseCategory) -> bool {
        let slot = match category {
            CauseCategory::Air => &mut self.air,
            CauseCategory::Water => &mut self.water,
            CauseCategory::Soil => &mut self.soil,
        };
        *slot = !*slot;
        *slot
    }
}
