use serde::{Deserialize, Serialize};

use super::defaults;

/// Weighting used by the version inference engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Weight one matching token adds to its era's accumulator.
    pub match_weight: f64,
    /// Multiplier applied to matches on free-text tokens.
    pub free_text_factor: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            match_weight: defaults::DEFAULT_MATCH_WEIGHT,
            free_text_factor: defaults::DEFAULT_FREE_TEXT_FACTOR,
        }
    }
}
