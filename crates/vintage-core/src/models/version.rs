//! Generic version-string handling shared by the registry and the collector.

/// Numeric segments of the first version-like run in `raw`.
///
/// `"v2.3.0"` → `[2, 3, 0]`, `"react@18.2"` → `[18, 2]`, `"next"` → `None`.
pub fn version_segments(raw: &str) -> Option<Vec<u64>> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run: &str = raw[start..]
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .next()
        .unwrap_or_default();

    let mut segments = Vec::new();
    for part in run.split('.') {
        if part.is_empty() {
            break;
        }
        segments.push(part.parse::<u64>().ok()?);
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

/// Segment-wise prefix test: `[2, 3]` is a prefix of `[2, 3, 1]` but not of `[2, 30]`.
pub fn has_version_prefix(version: &[u64], prefix: &[u64]) -> bool {
    !prefix.is_empty() && version.starts_with(prefix)
}
