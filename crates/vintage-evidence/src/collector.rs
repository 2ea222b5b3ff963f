//! Fragment tokenization.

use std::ops::Range;

use vintage_core::config::CollectorConfig;
use vintage_core::models::{EvidenceToken, TokenKind};

use crate::patterns::{has_version_context, is_code_like, ERROR_RE, TOKEN_RE};

/// Turns raw evidence fragments into evidence tokens.
#[derive(Debug, Clone, Default)]
pub struct EvidenceCollector {
    config: CollectorConfig,
}

impl EvidenceCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Tokenize every fragment. Output order is fragment order, then byte
    /// offset; later stages break ties by first occurrence.
    pub fn collect<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<EvidenceToken> {
        fragments
            .iter()
            .enumerate()
            .flat_map(|(index, fragment)| self.collect_fragment(index, fragment.as_ref()))
            .collect()
    }

    fn collect_fragment(&self, index: usize, text: &str) -> Vec<EvidenceToken> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let (mut tokens, error_lines) = error_line_tokens(index, text);
        let mut prose = ProseSpan::default();

        for caps in TOKEN_RE.captures_iter(text) {
            if let Some(tick) = caps.name("tick") {
                prose.flush(index, text, &mut tokens);
                let inner = tick.as_str().trim();
                if !inner.is_empty() {
                    let lead = tick.as_str().len() - tick.as_str().trim_start().len();
                    let kind = if is_bare_version(inner) {
                        TokenKind::VersionString
                    } else {
                        TokenKind::Identifier
                    };
                    tokens.push(EvidenceToken::new(
                        inner,
                        kind,
                        index,
                        tick.start() + lead,
                    ));
                }
            } else if let Some(version) = caps.name("version") {
                let declared = version.as_str().starts_with('v')
                    || has_version_context(text, version.start(), version.end());
                if declared {
                    prose.flush(index, text, &mut tokens);
                    tokens.push(EvidenceToken::new(
                        version.as_str(),
                        TokenKind::VersionString,
                        index,
                        version.start(),
                    ));
                } else if error_lines.iter().any(|line| line.contains(&version.start())) {
                    prose.flush(index, text, &mut tokens);
                } else {
                    // A plain number (`temperature=0.7`) reads as prose.
                    prose.extend(index, text, version.range(), &mut tokens);
                }
            } else if let Some(word) = caps.name("word") {
                let called = text[word.end()..].starts_with('(');
                if called || is_code_like(word.as_str()) {
                    prose.flush(index, text, &mut tokens);
                    tokens.push(EvidenceToken::new(
                        word.as_str(),
                        TokenKind::Identifier,
                        index,
                        word.start(),
                    ));
                } else if error_lines.iter().any(|line| line.contains(&word.start())) {
                    // Already covered by the error-text token for this line.
                    prose.flush(index, text, &mut tokens);
                } else {
                    prose.extend(index, text, word.range(), &mut tokens);
                }
            }
        }
        prose.flush(index, text, &mut tokens);

        if tokens.is_empty() {
            let trimmed = text.trim();
            let offset = text.len() - text.trim_start().len();
            return vec![EvidenceToken::new(trimmed, TokenKind::FreeText, index, offset)];
        }

        // Stable: an error line token stays ahead of tokens starting at the same offset.
        tokens.sort_by_key(|t| t.offset);
        if tokens.len() > self.config.max_tokens_per_fragment {
            tracing::debug!(
                fragment = index,
                produced = tokens.len(),
                kept = self.config.max_tokens_per_fragment,
                "evidence fragment truncated"
            );
            tokens.truncate(self.config.max_tokens_per_fragment);
        }
        tokens
    }
}

/// Tokenize with the default collector configuration.
pub fn collect<S: AsRef<str>>(fragments: &[S]) -> Vec<EvidenceToken> {
    EvidenceCollector::default().collect(fragments)
}

/// `v2`, `2.3.0`, `v18.2.1`: a quoted span that is nothing but a version.
fn is_bare_version(text: &str) -> bool {
    let body = text.strip_prefix('v').unwrap_or(text);
    body.starts_with(|c: char| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Emit one error-text token per line carrying error vocabulary.
/// Returns the tokens and the byte ranges of those lines.
fn error_line_tokens(index: usize, text: &str) -> (Vec<EvidenceToken>, Vec<Range<usize>>) {
    let mut tokens = Vec::new();
    let mut ranges = Vec::new();
    let mut line_start = 0;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if !trimmed.is_empty() && ERROR_RE.is_match(trimmed) {
            let lead = line.len() - line.trim_start().len();
            tokens.push(EvidenceToken::new(
                trimmed,
                TokenKind::ErrorText,
                index,
                line_start + lead,
            ));
            ranges.push(line_start..line_start + line.len());
        }
        line_start += line.len();
    }
    (tokens, ranges)
}

/// A run of prose words waiting to become one free-text token.
#[derive(Debug, Default)]
struct ProseSpan {
    range: Option<Range<usize>>,
}

impl ProseSpan {
    /// Add a word; a line break between spans ends the previous one.
    fn extend(
        &mut self,
        index: usize,
        text: &str,
        word: Range<usize>,
        tokens: &mut Vec<EvidenceToken>,
    ) {
        match &self.range {
            Some(span) if !text[span.end..word.start].contains('\n') => {
                self.range = Some(span.start..word.end);
            }
            _ => {
                self.flush(index, text, tokens);
                self.range = Some(word);
            }
        }
    }

    fn flush(&mut self, index: usize, text: &str, tokens: &mut Vec<EvidenceToken>) {
        if let Some(span) = self.range.take() {
            tokens.push(EvidenceToken::new(
                &text[span.clone()],
                TokenKind::FreeText,
                index,
                span.start,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[EvidenceToken]) -> Vec<(String, TokenKind)> {
        tokens.iter().map(|t| (t.text.clone(), t.kind)).collect()
    }

    #[test]
    fn blank_fragments_produce_nothing() {
        assert!(collect(&["", "   \n\t"]).is_empty());
    }

    #[test]
    fn quoted_version_becomes_version_string() {
        let tokens = collect(&["pinned to `v18.2.1` today"]);
        assert_eq!(
            kinds(&tokens),
            vec![
                ("pinned to".to_string(), TokenKind::FreeText),
                ("v18.2.1".to_string(), TokenKind::VersionString),
                ("today".to_string(), TokenKind::FreeText),
            ]
        );
    }

    #[test]
    fn float_literal_stays_in_prose() {
        let tokens = collect(&["create(model=m, temperature=0.7)"]);
        assert!(tokens.iter().all(|t| t.kind != TokenKind::VersionString));
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::FreeText && t.text == "model=m, temperature=0.7"));
    }

    #[test]
    fn line_breaks_split_prose() {
        let tokens = collect(&["first line\nsecond line"]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "second line");
        assert_eq!(tokens[1].offset, 11);
    }

    #[test]
    fn truncates_to_configured_cap() {
        let collector = EvidenceCollector::new(CollectorConfig {
            max_tokens_per_fragment: 2,
        });
        let tokens = collector.collect(&["a.b c.d e.f g.h"]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "c.d");
    }
}
