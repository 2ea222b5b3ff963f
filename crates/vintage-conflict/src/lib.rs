//! # vintage-conflict
//!
//! Compares a claim against the era data of one technology profile.
//!
//! The claim is matched to registry facts, each matched fact is placed on
//! the profile's era line (introduced, deprecated, removed), and the
//! detection strategies run in priority order against the inferred era.
//! At most one conflict is reported per fact.

pub mod detection;
pub mod lookup;

use vintage_core::models::{Claim, Conflict, TechnologyProfile};

pub use lookup::{matching_facts, PlacedFact};

/// Conflicts between `claim` and `profile` when the evidence points at era
/// position `inferred_era`. An unrecognized fact yields no conflicts.
pub fn detect(profile: &TechnologyProfile, claim: &Claim, inferred_era: usize) -> Vec<Conflict> {
    let Some(inferred_label) = profile.eras.get(inferred_era).map(|e| e.label.as_str()) else {
        return Vec::new();
    };

    let conflicts: Vec<Conflict> = matching_facts(profile, &claim.fact)
        .iter()
        .filter_map(|fact| detection::detect_first(profile, fact, inferred_era))
        .collect();

    if !conflicts.is_empty() {
        tracing::debug!(
            technology = %profile.name,
            inferred_era = inferred_label,
            conflicts = conflicts.len(),
            "claim conflicts with era data"
        );
    }
    conflicts
}
