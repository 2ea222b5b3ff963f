//! The decision table.

use std::fmt;

use vintage_core::models::{ConfidenceLevel, ResponsePattern, VolatilityTier};

use crate::Signals;

/// One row: a condition and the verdict it produces.
#[derive(Clone, Copy)]
pub struct DecisionRow {
    pub name: &'static str,
    pub when: fn(&Signals) -> bool,
    pub level: ConfidenceLevel,
    pub pattern: ResponsePattern,
}

impl fmt::Debug for DecisionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionRow")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("pattern", &self.pattern)
            .finish()
    }
}

/// Position of the unknown-technology row.
pub(crate) const UNKNOWN_ROW: usize = 8;

/// Rows in priority order. Conflict rows come first so a contradicted claim
/// is never stated directly, whatever the tier.
pub static DECISION_TABLE: [DecisionRow; 10] = [
    DecisionRow {
        name: "removed-fact",
        when: |s| s.removed,
        level: ConfidenceLevel::Low,
        pattern: ResponsePattern::HedgeAndCorrect,
    },
    DecisionRow {
        name: "deprecated-or-mismatched-fact",
        when: |s| s.outdated,
        level: ConfidenceLevel::Low,
        pattern: ResponsePattern::QualifyWithVersion,
    },
    DecisionRow {
        name: "glacial",
        when: |s| s.tier_is(VolatilityTier::Glacial) && !s.any_conflict,
        level: ConfidenceLevel::High,
        pattern: ResponsePattern::StateDirectly,
    },
    DecisionRow {
        name: "slow-confident",
        when: |s| s.tier_is(VolatilityTier::Slow) && !s.any_conflict && s.slow_band_met(),
        level: ConfidenceLevel::High,
        pattern: ResponsePattern::StateWithVersionNote,
    },
    DecisionRow {
        name: "slow-uncertain",
        when: |s| s.tier_is(VolatilityTier::Slow) && !s.any_conflict,
        level: ConfidenceLevel::Medium,
        pattern: ResponsePattern::QualifyWithVersion,
    },
    DecisionRow {
        name: "active-confident",
        when: |s| s.tier_is(VolatilityTier::Active) && s.active_band_met(),
        level: ConfidenceLevel::Medium,
        pattern: ResponsePattern::QualifyHeavily,
    },
    DecisionRow {
        name: "active-uncertain",
        when: |s| s.tier_is(VolatilityTier::Active),
        level: ConfidenceLevel::Low,
        pattern: ResponsePattern::ProvideStableCoreOnly,
    },
    DecisionRow {
        name: "rapid",
        when: |s| s.tier_is(VolatilityTier::Rapid),
        level: ConfidenceLevel::Low,
        pattern: ResponsePattern::GeneralPatternOnly,
    },
    DecisionRow {
        name: "unknown-technology",
        when: |s| s.tier.is_none(),
        level: ConfidenceLevel::Unknown,
        pattern: ResponsePattern::DeferToUserEnvironment,
    },
    // Glacial or Slow with only renamed-or-shifted conflicts.
    DecisionRow {
        name: "stable-shifted",
        when: |s| s.tier.is_some_and(|t| t <= VolatilityTier::Slow),
        level: ConfidenceLevel::Medium,
        pattern: ResponsePattern::QualifyWithVersion,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_row_index_is_in_sync() {
        assert_eq!(DECISION_TABLE[UNKNOWN_ROW].name, "unknown-technology");
    }

    #[test]
    fn every_pattern_is_reachable_from_the_table() {
        for pattern in ResponsePattern::ALL {
            assert!(
                DECISION_TABLE.iter().any(|row| row.pattern == pattern),
                "{pattern} missing from table"
            );
        }
    }
}
