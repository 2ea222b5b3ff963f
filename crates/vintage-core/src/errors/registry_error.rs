use serde::{Deserialize, Serialize};

/// Errors that reject a whole profile batch. The previously published
/// snapshot stays active when any of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryLoadError {
    #[error("failed to parse {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("technology profile with empty name")]
    EmptyName,

    #[error("technology '{name}' is declared more than once")]
    DuplicateTechnology { name: String },

    #[error("technology '{technology}' has tier {tier} but no eras")]
    MissingEras { technology: String, tier: String },

    #[error("technology '{technology}' declares era '{era}' more than once")]
    DuplicateEra { technology: String, era: String },

    #[error("technology '{technology}': era '{later}' does not come after '{earlier}'")]
    NonChronologicalEras {
        technology: String,
        earlier: String,
        later: String,
    },

    #[error("technology '{technology}': fact '{fact}' references unknown era '{era}'")]
    UnknownEraMarker {
        technology: String,
        fact: String,
        era: String,
    },

    #[error(
        "technology '{technology}': fact '{fact}' violates introduced <= deprecated <= removed"
    )]
    FactOrdering { technology: String, fact: String },

    #[error("technology '{technology}': fact '{fact}' is known-true in more than one era")]
    DuplicateFact { technology: String, fact: String },

    #[error("technology '{technology}': signal rule '{rule}' is declared more than once")]
    DuplicateRule { technology: String, rule: String },

    #[error("technology '{technology}': signal rule '{rule}' has an empty pattern")]
    EmptyPattern { technology: String, rule: String },

    #[error("technology '{technology}': signal rule '{rule}' has an invalid pattern: {message}")]
    InvalidPattern {
        technology: String,
        rule: String,
        message: String,
    },

    #[error("technology '{technology}': pattern '{pattern}' points at eras {eras:?}")]
    AmbiguousSignal {
        technology: String,
        pattern: String,
        eras: Vec<String>,
    },
}

/// Non-fatal findings reported alongside a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryWarning {
    /// The same literal pattern asserts different eras of one technology.
    AmbiguousSignal {
        technology: String,
        pattern: String,
        eras: Vec<String>,
    },
    /// An era carries neither signals nor facts.
    EmptyEra { technology: String, era: String },
}

impl std::fmt::Display for RegistryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousSignal {
                technology,
                pattern,
                eras,
            } => write!(
                f,
                "{technology}: pattern '{pattern}' is claimed by eras {}",
                eras.join(", ")
            ),
            Self::EmptyEra { technology, era } => {
                write!(f, "{technology}: era '{era}' has no signals or facts")
            }
        }
    }
}
