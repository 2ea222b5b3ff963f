use serde::{Deserialize, Serialize};

use super::TokenKind;

/// How the era ranking was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceOutcome {
    /// Technology is not in the registry. Treated like `NoEvidence`.
    UnknownTechnology,
    /// No signal rule matched any token.
    NoEvidence,
    /// Ranking built from accumulated rule weights.
    Weighted,
    /// A version-string token matched a rule and decided the era outright.
    ExplicitVersion,
}

/// Accumulated and normalized support for one era.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraScore {
    pub era: String,
    /// Position of the era in the profile, oldest first.
    pub era_index: usize,
    pub weight: f64,
    /// `weight / sum(weights)`, in [0, 1].
    pub score: f64,
}

/// One rule firing on one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalMatch {
    pub rule_id: String,
    pub era: String,
    pub token: String,
    pub token_kind: TokenKind,
    pub weight: f64,
}

/// Ranked era hypotheses for one technology, highest score first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraInference {
    pub outcome: InferenceOutcome,
    pub ranked: Vec<EraScore>,
    pub matched: Vec<SignalMatch>,
}

impl EraInference {
    pub fn unknown_technology() -> Self {
        Self {
            outcome: InferenceOutcome::UnknownTechnology,
            ranked: Vec::new(),
            matched: Vec::new(),
        }
    }

    pub fn no_evidence() -> Self {
        Self {
            outcome: InferenceOutcome::NoEvidence,
            ranked: Vec::new(),
            matched: Vec::new(),
        }
    }

    pub fn winner(&self) -> Option<&EraScore> {
        self.ranked.first()
    }

    /// Winning era score, 0.0 when nothing was inferred.
    pub fn winning_score(&self) -> f64 {
        self.winner().map(|w| w.score).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
