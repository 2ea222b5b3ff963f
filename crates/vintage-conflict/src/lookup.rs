//! Claim-to-fact lookup.

use vintage_core::models::{normalize_fact_text, Fact, TechnologyProfile};

/// A registry fact positioned on its profile's era line.
#[derive(Debug, Clone, Copy)]
pub struct PlacedFact<'a> {
    pub fact: &'a Fact,
    /// Era the fact is known-true in.
    pub introduced: usize,
    pub deprecated: Option<usize>,
    pub removed: Option<usize>,
}

/// Facts the claim asserts.
///
/// An exact (normalized) match shadows everything else. Without one, every
/// fact whose text appears inside the claim on word boundaries is returned,
/// in era then declaration order.
pub fn matching_facts<'a>(profile: &'a TechnologyProfile, claim: &str) -> Vec<PlacedFact<'a>> {
    let claim = normalize_fact_text(claim);
    if claim.is_empty() {
        return Vec::new();
    }

    let placed: Vec<(String, PlacedFact<'a>)> = profile
        .eras
        .iter()
        .enumerate()
        .flat_map(|(introduced, era)| {
            era.facts.iter().map(move |fact| (fact, introduced))
        })
        .map(|(fact, introduced)| {
            let placed = PlacedFact {
                fact,
                introduced,
                deprecated: fact
                    .deprecated_in
                    .as_deref()
                    .and_then(|label| profile.era_index(label)),
                removed: fact
                    .removed_in
                    .as_deref()
                    .and_then(|label| profile.era_index(label)),
            };
            (fact.normalized(), placed)
        })
        .collect();

    let exact: Vec<PlacedFact<'a>> = placed
        .iter()
        .filter(|(text, _)| *text == claim)
        .map(|(_, p)| *p)
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    placed
        .into_iter()
        .filter(|(text, _)| !text.is_empty() && contains_on_word_boundary(&claim, text))
        .map(|(_, p)| p)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `needle` occurs in `haystack` without word characters glued to either end.
fn contains_on_word_boundary(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c) || !needle.starts_with(is_word_char));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c) || !needle.ends_with(is_word_char));
        before_ok && after_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries() {
        assert!(contains_on_word_boundary("use reactdom.render here", "reactdom.render"));
        assert!(contains_on_word_boundary("reactdom.render()", "reactdom.render"));
        assert!(!contains_on_word_boundary("reactdom.renderer", "reactdom.render"));
        assert!(!contains_on_word_boundary("preuseeffect", "useeffect"));
        assert!(contains_on_word_boundary("call old-call now", "old-call"));
    }
}
