use serde::{Deserialize, Serialize};

use super::defaults;

/// Registry loading behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Reject batches with ambiguous signal patterns instead of warning.
    pub strict_ambiguity: bool,
    /// Directories scanned by the directory loader, in order.
    pub profile_dirs: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_ambiguity: defaults::DEFAULT_STRICT_AMBIGUITY,
            profile_dirs: Vec::new(),
        }
    }
}
