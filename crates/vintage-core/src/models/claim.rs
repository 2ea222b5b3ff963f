use serde::{Deserialize, Serialize};

/// A fact asserted about a technology, supplied per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub technology: String,
    pub fact: String,
}

impl Claim {
    pub fn new(technology: impl Into<String>, fact: impl Into<String>) -> Self {
        Self {
            technology: technology.into(),
            fact: fact.into(),
        }
    }

    /// True when neither the technology nor the fact carries any content.
    pub fn is_blank(&self) -> bool {
        self.technology.trim().is_empty() && self.fact.trim().is_empty()
    }
}
