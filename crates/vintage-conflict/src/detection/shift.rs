//! Fact that only exists in an era after the inferred one.
//!
//! One era ahead reads as a rename or moved API; further ahead means the
//! evidence and the claim describe different versions.

use vintage_core::models::{Conflict, ConflictKind, TechnologyProfile};

use super::label;
use crate::lookup::PlacedFact;

pub fn detect(
    profile: &TechnologyProfile,
    fact: &PlacedFact<'_>,
    inferred_era: usize,
) -> Option<Conflict> {
    let distance = fact.introduced.checked_sub(inferred_era).filter(|&d| d > 0)?;
    let fact_label = label(profile, fact.introduced);
    let inferred_label = label(profile, inferred_era);

    let (kind, description) = if distance == 1 {
        (
            ConflictKind::RenamedOrShifted,
            format!(
                "'{}' belongs to {} {}, one era after the inferred {}",
                fact.fact.text, profile.name, fact_label, inferred_label
            ),
        )
    } else {
        (
            ConflictKind::VersionMismatchWithEvidence,
            format!(
                "'{}' belongs to {} {}, {} eras after the inferred {}",
                fact.fact.text, profile.name, fact_label, distance, inferred_label
            ),
        )
    };

    Some(Conflict {
        kind,
        fact: fact.fact.text.clone(),
        fact_era: fact_label,
        inferred_era: inferred_label,
        marker_era: None,
        description,
    })
}
