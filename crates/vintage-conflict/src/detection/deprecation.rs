//! Fact deprecated, but not yet removed, at the inferred era.

use vintage_core::models::{Conflict, ConflictKind, TechnologyProfile};

use super::label;
use crate::lookup::PlacedFact;

pub fn detect(
    profile: &TechnologyProfile,
    fact: &PlacedFact<'_>,
    inferred_era: usize,
) -> Option<Conflict> {
    if fact.removed.is_some_and(|r| r <= inferred_era) {
        return None;
    }
    let deprecated = fact.deprecated.filter(|&d| d <= inferred_era)?;
    let deprecated_label = label(profile, deprecated);
    let inferred_label = label(profile, inferred_era);

    Some(Conflict {
        kind: ConflictKind::DeprecatedButAssertedCurrent,
        fact: fact.fact.text.clone(),
        fact_era: label(profile, fact.introduced),
        description: format!(
            "'{}' is deprecated since {} {}, evidence points at {}",
            fact.fact.text, profile.name, deprecated_label, inferred_label
        ),
        inferred_era: inferred_label,
        marker_era: Some(deprecated_label),
    })
}
