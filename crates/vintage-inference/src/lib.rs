//! # vintage-inference
//!
//! Infers which era of a technology the evidence points at.
//!
//! Every compiled signal rule is tested against every token. A declared
//! version that matches a rule decides the era outright; otherwise matches
//! accumulate weight per era and the eras are ranked by normalized score.

pub mod explicit;
pub mod ranking;

use vintage_core::config::InferenceConfig;
use vintage_core::models::{EraInference, EvidenceToken, InferenceOutcome};
use vintage_registry::CompiledProfile;

pub use ranking::EraAccumulator;

/// Rank the eras of `profile` against `tokens`.
///
/// `None` means the technology is not in the registry.
pub fn infer(
    profile: Option<&CompiledProfile>,
    tokens: &[EvidenceToken],
    config: &InferenceConfig,
) -> EraInference {
    let Some(profile) = profile else {
        return EraInference::unknown_technology();
    };

    if let Some(inference) = explicit::declared_version(profile, tokens, config) {
        tracing::debug!(
            technology = %profile.profile.name,
            era = inference.ranked.first().map(|e| e.era.as_str()).unwrap_or_default(),
            "era decided by declared version"
        );
        return inference;
    }

    let mut accumulator = EraAccumulator::new(profile);
    for token in tokens {
        for rule in profile.rules.iter().filter(|r| r.matcher.matches(token)) {
            accumulator.add(rule, token, config);
        }
    }

    if accumulator.is_empty() {
        return EraInference::no_evidence();
    }

    let (ranked, matched) = accumulator.finish();
    tracing::debug!(
        technology = %profile.profile.name,
        eras = ranked.len(),
        matches = matched.len(),
        "era ranking computed"
    );
    EraInference {
        outcome: InferenceOutcome::Weighted,
        ranked,
        matched,
    }
}
