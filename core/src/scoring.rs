use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub points_per_cell: u32,
    /// Bonus per combo level, paid from the second cascade of a move onwards.
    pub combo_bonus: u32,
}

impl ScoringRules {
    pub const DEFAULT_POINTS_PER_CELL: u32 = 10;
    pub const DEFAULT_COMBO_BONUS: u32 = 5;

    pub const fn new(points_per_cell: u32, combo_bonus: u32) -> Self {
        Self {
            points_per_cell,
            combo_bonus,
        }
    }

    /// Points for one cascade iteration that cleared `cleared` cells at combo level `combo`.
    pub const fn award(&self, cleared: CellCount, combo: u32) -> Award {
        let base = (cleared as u32).saturating_mul(self.points_per_cell);
        let bonus = if combo > 1 {
            combo.saturating_mul(self.combo_bonus)
        } else {
            0
        };
        Award { base, bonus }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POINTS_PER_CELL, Self::DEFAULT_COMBO_BONUS)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub base: u32,
    pub bonus: u32,
}

impl Award {
    pub const fn total(self) -> u32 {
        self.base.saturating_add(self.bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cascade_earns_no_bonus() {
        let award = ScoringRules::default().award(4, 1);

        assert_eq!(award, Award { base: 40, bonus: 0 });
        assert_eq!(award.total(), 40);
    }

    #[test]
    fn bonus_grows_with_combo_level() {
        let rules = ScoringRules::default();

        assert_eq!(rules.award(3, 2), Award { base: 30, bonus: 10 });
        assert_eq!(rules.award(5, 3), Award { base: 50, bonus: 15 });
        assert_eq!(rules.award(0, 0).total(), 0);
    }

    #[test]
    fn custom_rules_apply_their_own_constants() {
        let rules = ScoringRules::new(7, 100);

        assert_eq!(rules.award(3, 4), Award { base: 21, bonus: 400 });
    }
}
