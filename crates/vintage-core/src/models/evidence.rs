use serde::{Deserialize, Serialize};

/// Kind of an atomic observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    VersionString,
    ErrorText,
    FreeText,
}

impl TokenKind {
    /// Free text is the weakest kind of evidence.
    pub fn is_free_text(self) -> bool {
        self == Self::FreeText
    }
}

/// One normalized observation extracted from raw evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceToken {
    pub text: String,
    pub kind: TokenKind,
    /// Index of the input fragment the token came from.
    pub fragment: usize,
    /// Byte offset inside that fragment.
    pub offset: usize,
}

impl EvidenceToken {
    pub fn new(text: impl Into<String>, kind: TokenKind, fragment: usize, offset: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            fragment,
            offset,
        }
    }
}
