//! Declared-version short circuit.

use vintage_core::config::InferenceConfig;
use vintage_core::models::{EraInference, EraScore, EvidenceToken, InferenceOutcome, TokenKind};
use vintage_registry::{CompiledProfile, CompiledRule};

use crate::ranking::signal_match;

/// The first version-string token (input order) that matches any rule
/// settles the era with score 1.0. When that token matches rules in
/// several eras, the latest one wins.
pub fn declared_version(
    profile: &CompiledProfile,
    tokens: &[EvidenceToken],
    config: &InferenceConfig,
) -> Option<EraInference> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::VersionString)
        .find_map(|token| {
            let hits: Vec<&CompiledRule> = profile
                .rules
                .iter()
                .filter(|r| r.matcher.matches(token))
                .collect();
            let era_index = hits.iter().map(|r| r.era_index).max()?;
            let era = &profile.profile.eras[era_index];

            let matched = hits
                .iter()
                .filter(|r| r.era_index == era_index)
                .map(|r| signal_match(r, token, config.match_weight))
                .collect();

            Some(EraInference {
                outcome: InferenceOutcome::ExplicitVersion,
                ranked: vec![EraScore {
                    era: era.label.clone(),
                    era_index,
                    weight: config.match_weight,
                    score: 1.0,
                }],
                matched,
            })
        })
}
