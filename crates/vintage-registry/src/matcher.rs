//! Compiled form of a [`SignalPattern`].

use regex::Regex;

use vintage_core::models::version::{has_version_prefix, version_segments};
use vintage_core::models::{EvidenceToken, SignalPattern, TokenKind};

/// Path separators recognised when matching identifier suffixes.
const PATH_SEPARATORS: [&str; 3] = [".", "::", "->"];

/// A signal pattern ready to run against evidence tokens.
#[derive(Debug, Clone)]
pub enum TokenMatcher {
    Literal(String),
    Identifier(String),
    Version(Vec<u64>),
    Regex(Regex),
}

impl TokenMatcher {
    /// Compile a pattern. Returns a human-readable reason on failure.
    pub fn compile(pattern: &SignalPattern) -> Result<Self, String> {
        let value = pattern.normalized_value();
        if value.is_empty() {
            return Err("empty pattern".to_string());
        }
        match pattern {
            SignalPattern::Literal(_) => Ok(Self::Literal(value.to_string())),
            SignalPattern::Identifier(_) => Ok(Self::Identifier(value.to_string())),
            SignalPattern::Version(_) => version_segments(value)
                .map(Self::Version)
                .ok_or_else(|| format!("'{value}' is not a version")),
            SignalPattern::Regex(_) => Regex::new(value)
                .map(Self::Regex)
                .map_err(|e| e.to_string()),
        }
    }

    pub fn matches(&self, token: &EvidenceToken) -> bool {
        match self {
            Self::Literal(value) => token.text.contains(value.as_str()),
            Self::Identifier(value) => {
                token.kind == TokenKind::Identifier && identifier_matches(&token.text, value)
            }
            Self::Version(prefix) => {
                token.kind == TokenKind::VersionString
                    && version_segments(&token.text)
                        .is_some_and(|segments| has_version_prefix(&segments, prefix))
            }
            Self::Regex(re) => re.is_match(&token.text),
        }
    }
}

fn identifier_matches(text: &str, value: &str) -> bool {
    let text = text.trim_end_matches("()");
    if text == value {
        return true;
    }
    PATH_SEPARATORS.iter().any(|sep| {
        text.strip_suffix(value)
            .is_some_and(|head| head.ends_with(sep))
    })
}
