//! Fact removed at or before the inferred era.

use vintage_core::models::{Conflict, ConflictKind, TechnologyProfile};

use super::label;
use crate::lookup::PlacedFact;

pub fn detect(
    profile: &TechnologyProfile,
    fact: &PlacedFact<'_>,
    inferred_era: usize,
) -> Option<Conflict> {
    let removed = fact.removed.filter(|&r| r <= inferred_era)?;
    let removed_label = label(profile, removed);
    let inferred_label = label(profile, inferred_era);

    Some(Conflict {
        kind: ConflictKind::RemovedButAssertedPresent,
        fact: fact.fact.text.clone(),
        fact_era: label(profile, fact.introduced),
        description: format!(
            "'{}' was removed in {} {}, evidence points at {}",
            fact.fact.text, profile.name, removed_label, inferred_label
        ),
        inferred_era: inferred_label,
        marker_era: Some(removed_label),
    })
}
