use serde::{Deserialize, Serialize};

/// A presence-only evidence pattern: a match implies the rule's era,
/// absence implies nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRule {
    pub id: String,
    pub pattern: SignalPattern,
    /// Owning technology, filled from the enclosing profile at load.
    #[serde(default)]
    pub technology: String,
    /// Target era label, filled from the enclosing era at load.
    #[serde(default)]
    pub era: String,
}

/// Matcher over evidence tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SignalPattern {
    /// Token text contains the value.
    Literal(String),
    /// Identifier token equal to the value, or ending in it as a path segment.
    Identifier(String),
    /// Version-string token whose numeric segments start with the value's.
    Version(String),
    /// Regular expression over token text.
    Regex(String),
}

impl SignalPattern {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Identifier(_) => "identifier",
            Self::Version(_) => "version",
            Self::Regex(_) => "regex",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Literal(v) | Self::Identifier(v) | Self::Version(v) | Self::Regex(v) => v,
        }
    }

    /// The value as matchers see it: trimmed, identifiers without a trailing `()`.
    pub fn normalized_value(&self) -> &str {
        let value = self.value().trim();
        match self {
            Self::Identifier(_) => value.trim_end_matches("()"),
            _ => value,
        }
    }

    /// Stable `kind:value` key used for ambiguity checks and logging.
    /// Patterns that compile to the same matcher share a key.
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind(), self.normalized_value())
    }
}
