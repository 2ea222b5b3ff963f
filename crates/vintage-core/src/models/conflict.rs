use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed mismatch between an asserted fact and the registry's era data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// The fact as recorded in the registry.
    pub fact: String,
    /// Era in which the fact is known-true.
    pub fact_era: String,
    /// Era the evidence points at.
    pub inferred_era: String,
    /// Deprecation or removal era that triggered the conflict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_era: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    /// Deprecated at or before the inferred era, not yet removed.
    DeprecatedButAssertedCurrent,
    /// Removed at or before the inferred era.
    RemovedButAssertedPresent,
    /// Known-true only in the era adjacent to the inferred one.
    RenamedOrShifted,
    /// Known-true only in an era more than one step away from the inferred one.
    VersionMismatchWithEvidence,
}

impl ConflictKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::DeprecatedButAssertedCurrent => "deprecated-but-asserted-current",
            Self::RemovedButAssertedPresent => "removed-but-asserted-present",
            Self::RenamedOrShifted => "renamed-or-shifted",
            Self::VersionMismatchWithEvidence => "version-mismatch-with-evidence",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
