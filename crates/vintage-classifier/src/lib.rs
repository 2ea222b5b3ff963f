//! # vintage-classifier
//!
//! Maps (volatility tier, era score, conflicts) to a confidence level and a
//! response pattern. The mapping lives in one place, [`DECISION_TABLE`],
//! evaluated top-down with the first matching row winning.

pub mod table;

use vintage_core::constants::{ACTIVE_TIER_SCORE_THRESHOLD, SLOW_TIER_SCORE_THRESHOLD};
use vintage_core::models::{ConfidenceLevel, Conflict, ConflictKind, ResponsePattern, VolatilityTier};

pub use table::{DecisionRow, DECISION_TABLE};

/// Facts about one assessment that the decision table looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// `None` when the technology is not in the registry.
    pub tier: Option<VolatilityTier>,
    pub score: f64,
    pub removed: bool,
    /// Deprecation or version-mismatch conflict present.
    pub outdated: bool,
    pub any_conflict: bool,
}

impl Signals {
    pub fn new(tier: Option<VolatilityTier>, score: f64, conflicts: &[Conflict]) -> Self {
        let has = |kind: ConflictKind| conflicts.iter().any(|c| c.kind == kind);
        Self {
            tier,
            score,
            removed: has(ConflictKind::RemovedButAssertedPresent),
            outdated: has(ConflictKind::DeprecatedButAssertedCurrent)
                || has(ConflictKind::VersionMismatchWithEvidence),
            any_conflict: !conflicts.is_empty(),
        }
    }

    pub(crate) fn tier_is(&self, tier: VolatilityTier) -> bool {
        self.tier == Some(tier)
    }

    pub(crate) fn slow_band_met(&self) -> bool {
        self.score >= SLOW_TIER_SCORE_THRESHOLD
    }

    pub(crate) fn active_band_met(&self) -> bool {
        self.score >= ACTIVE_TIER_SCORE_THRESHOLD
    }
}

/// Index into [`DECISION_TABLE`] of the row that fires for these inputs.
pub fn explain(tier: Option<VolatilityTier>, score: f64, conflicts: &[Conflict]) -> usize {
    let signals = Signals::new(tier, score, conflicts);
    DECISION_TABLE
        .iter()
        .position(|row| (row.when)(&signals))
        .unwrap_or(table::UNKNOWN_ROW)
}

/// Confidence level and response pattern for one assessment.
pub fn classify(
    tier: Option<VolatilityTier>,
    score: f64,
    conflicts: &[Conflict],
) -> (ConfidenceLevel, ResponsePattern) {
    let row = &DECISION_TABLE[explain(tier, score, conflicts)];
    (row.level, row.pattern)
}
