//! Conflict detection strategies.
//!
//! Three strategies, run against one placed fact in priority order.
//! Removal outranks deprecation, which outranks an era shift.

pub mod deprecation;
pub mod removal;
pub mod shift;

use vintage_core::models::{Conflict, TechnologyProfile};

use crate::lookup::PlacedFact;

/// Run the strategies in priority order and return the first conflict.
pub fn detect_first(
    profile: &TechnologyProfile,
    fact: &PlacedFact<'_>,
    inferred_era: usize,
) -> Option<Conflict> {
    // 1. Removed at or before the inferred era.
    if let Some(c) = removal::detect(profile, fact, inferred_era) {
        return Some(c);
    }

    // 2. Deprecated at or before the inferred era.
    if let Some(c) = deprecation::detect(profile, fact, inferred_era) {
        return Some(c);
    }

    // 3. Known-true only in a later era.
    shift::detect(profile, fact, inferred_era)
}

/// Era label at `index`; validated profiles always have it.
pub(crate) fn label(profile: &TechnologyProfile, index: usize) -> String {
    profile
        .eras
        .get(index)
        .map(|e| e.label.clone())
        .unwrap_or_default()
}
