use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence collector limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Tokens kept per input fragment; the rest are dropped.
    pub max_tokens_per_fragment: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_tokens_per_fragment: defaults::DEFAULT_MAX_TOKENS_PER_FRAGMENT,
        }
    }
}
