//! Static tokenizer patterns.

use regex::Regex;
use std::sync::LazyLock;

/// Vocabulary that marks a line as error output.
pub static ERROR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(error|exception|traceback|panicked|failed|undefined|not found|not a function|has no attribute|deprecated|cannot find|unresolved)\b",
    )
    .unwrap()
});

/// Backtick spans, version strings, then identifier-shaped words.
/// Alternation order matters: `v2.3` must win over the word `v2`. Bare
/// dotted numbers are only versions with context, see [`has_version_context`].
pub static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"`(?P<tick>[^`\n]+)`|(?P<version>\bv\d+(?:\.\d+)*\b|\b\d+(?:\.\d+)+\b)|(?P<word>[A-Za-z_$][A-Za-z0-9_$]*(?:(?:\.|::|->)[A-Za-z_$][A-Za-z0-9_$]*)*)",
    )
    .unwrap()
});

/// A version keyword right before a bare number: `version 2.3`, `ver: 2.3`.
static VERSION_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:version|ver|release|v)\s*[:=]?\s*$").unwrap()
});

/// Operators that pin a package to a version: `react@18.2`, `requests==2.31`, `^19.0`.
const VERSION_OPERATORS: [&str; 10] = ["@", "==", ">=", "<=", "~=", "!=", "^", "~", ">", "<"];

/// Whether the bare dotted number at `text[start..end]` is declared as a version.
///
/// Bare numbers are floats unless something around them says otherwise: a
/// pinning operator, a version keyword, or a quoted value of a `key: "N.N"`
/// entry as in a package manifest. `temperature=0.7` is not a version.
pub fn has_version_context(text: &str, start: usize, end: usize) -> bool {
    let before = &text[..start];
    if VERSION_OPERATORS.iter().any(|op| before.ends_with(op)) {
        return true;
    }
    if VERSION_KEYWORD_RE.is_match(before) {
        return true;
    }
    let open = before.chars().next_back();
    let close = text[end..].chars().next();
    match (open, close) {
        (Some(q @ ('"' | '\'')), Some(c)) if q == c => {
            before[..before.len() - 1].trim_end().ends_with(':')
        }
        _ => false,
    }
}

/// Whether a word looks like code rather than prose.
///
/// Paths (`a.b`, `a::b`, `a->b`), snake_case, `$`-names, and camelCase or
/// PascalCase with an interior capital count as code. Plain words and
/// all-caps words (`SELECT`, `JSON`) do not.
pub fn is_code_like(word: &str) -> bool {
    if word.contains(['.', '_', '$']) || word.contains("::") || word.contains("->") {
        return true;
    }
    let has_lower = word.chars().any(|c| c.is_ascii_lowercase());
    let interior_upper = word.chars().skip(1).any(|c| c.is_ascii_uppercase());
    has_lower && interior_upper
}
