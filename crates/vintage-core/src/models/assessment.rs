use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Conflict, ConflictKind, EraScore, InferenceOutcome, SignalMatch, VolatilityTier};

/// Overall trust verdict for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    Unknown,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Identifier of a response strategy. Phrasing templates are owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponsePattern {
    StateDirectly,
    StateWithVersionNote,
    QualifyWithVersion,
    QualifyHeavily,
    ProvideStableCoreOnly,
    GeneralPatternOnly,
    HedgeAndCorrect,
    DeferToUserEnvironment,
}

impl ResponsePattern {
    pub const ALL: [ResponsePattern; 8] = [
        Self::StateDirectly,
        Self::StateWithVersionNote,
        Self::QualifyWithVersion,
        Self::QualifyHeavily,
        Self::ProvideStableCoreOnly,
        Self::GeneralPatternOnly,
        Self::HedgeAndCorrect,
        Self::DeferToUserEnvironment,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::StateDirectly => "state-directly",
            Self::StateWithVersionNote => "state-with-version-note",
            Self::QualifyWithVersion => "qualify-with-version",
            Self::QualifyHeavily => "qualify-heavily",
            Self::ProvideStableCoreOnly => "provide-stable-core-only",
            Self::GeneralPatternOnly => "general-pattern-only",
            Self::HedgeAndCorrect => "hedge-and-correct",
            Self::DeferToUserEnvironment => "defer-to-user-environment",
        }
    }
}

impl fmt::Display for ResponsePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The era an assessment settled on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraEstimate {
    pub label: String,
    /// Normalized support in [0, 1]; 0.0 when defaulted without evidence.
    pub score: f64,
}

/// Immutable result of one `assess` call. Holds no timestamps or random ids,
/// so equal inputs against the same snapshot compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Technology name as supplied by the caller.
    pub technology: String,
    /// Registry name the input resolved to, `None` when unknown.
    pub canonical_name: Option<String>,
    pub claim: String,
    pub volatility_tier: Option<VolatilityTier>,
    pub drift_window_days: Option<i64>,
    pub inferred_era: Option<EraEstimate>,
    pub inference_outcome: InferenceOutcome,
    pub era_ranking: Vec<EraScore>,
    pub matched_signals: Vec<SignalMatch>,
    pub conflicts: Vec<Conflict>,
    pub confidence: ConfidenceLevel,
    pub response_pattern: ResponsePattern,
    pub snapshot_version: u64,
    pub snapshot_fingerprint: String,
}

impl Assessment {
    pub fn is_known(&self) -> bool {
        self.canonical_name.is_some()
    }

    pub fn has_conflict(&self, kind: ConflictKind) -> bool {
        self.conflicts.iter().any(|c| c.kind == kind)
    }

    pub fn era_score(&self) -> f64 {
        self.inferred_era.as_ref().map(|e| e.score).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_pattern_ids_match_serde_names() {
        for pattern in ResponsePattern::ALL {
            let json = serde_json::to_string(&pattern).unwrap();
            assert_eq!(json, format!("\"{}\"", pattern.id()));
        }
    }
}
