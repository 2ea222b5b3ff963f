//! Per-era weight accumulation and normalized ranking.

use std::cmp::Ordering;

use vintage_core::config::InferenceConfig;
use vintage_core::models::{EraScore, EvidenceToken, SignalMatch};
use vintage_registry::{CompiledProfile, CompiledRule};

/// Weight collected per era, indexed by era position.
#[derive(Debug)]
pub struct EraAccumulator<'a> {
    profile: &'a CompiledProfile,
    weights: Vec<f64>,
    matched: Vec<SignalMatch>,
}

impl<'a> EraAccumulator<'a> {
    pub fn new(profile: &'a CompiledProfile) -> Self {
        Self {
            profile,
            weights: vec![0.0; profile.profile.eras.len()],
            matched: Vec::new(),
        }
    }

    /// Credit one rule firing on one token. Free text counts for less.
    pub fn add(&mut self, rule: &CompiledRule, token: &EvidenceToken, config: &InferenceConfig) {
        let weight = if token.kind.is_free_text() {
            config.match_weight * config.free_text_factor
        } else {
            config.match_weight
        };
        self.weights[rule.era_index] += weight;
        self.matched.push(signal_match(rule, token, weight));
    }

    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|w| *w <= 0.0)
    }

    /// Ranked eras (score descending, later era first on ties) and the matches.
    pub fn finish(self) -> (Vec<EraScore>, Vec<SignalMatch>) {
        let total: f64 = self.weights.iter().sum();
        let mut ranked: Vec<EraScore> = self
            .weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(era_index, &weight)| EraScore {
                era: self.profile.profile.eras[era_index].label.clone(),
                era_index,
                weight,
                score: weight / total,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then(b.era_index.cmp(&a.era_index))
        });
        (ranked, self.matched)
    }
}

pub(crate) fn signal_match(rule: &CompiledRule, token: &EvidenceToken, weight: f64) -> SignalMatch {
    SignalMatch {
        rule_id: rule.rule.id.clone(),
        era: rule.rule.era.clone(),
        token: token.text.clone(),
        token_kind: token.kind,
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vintage_core::config::RegistryConfig;
    use vintage_core::models::{Era, SignalPattern, SignalRule, TechnologyProfile, TokenKind};
    use vintage_registry::RegistrySnapshot;

    fn snapshot() -> RegistrySnapshot {
        let era = |label: &str, id: &str, ident: &str| Era {
            label: label.to_string(),
            since: None,
            signals: vec![SignalRule {
                id: id.to_string(),
                pattern: SignalPattern::Identifier(ident.to_string()),
                technology: String::new(),
                era: String::new(),
            }],
            facts: Vec::new(),
        };
        let profile = TechnologyProfile {
            name: "Tiny".to_string(),
            category: String::new(),
            aliases: Vec::new(),
            volatility_tier: vintage_core::VolatilityTier::Active,
            drift_window_days: None,
            eras: vec![era("one", "tiny-a", "alpha"), era("two", "tiny-b", "beta")],
        };
        RegistrySnapshot::build(vec![profile], 1, &RegistryConfig::default())
            .unwrap()
            .0
    }

    #[test]
    fn ties_prefer_the_later_era() {
        let snapshot = snapshot();
        let profile = snapshot.lookup("tiny").unwrap();
        let mut acc = EraAccumulator::new(profile);
        let config = InferenceConfig::default();
        for (i, rule) in profile.rules.iter().enumerate() {
            let token = EvidenceToken::new("x", TokenKind::Identifier, 0, i);
            acc.add(rule, &token, &config);
        }
        let (ranked, matched) = acc.finish();
        assert_eq!(matched.len(), 2);
        assert_eq!(ranked[0].era, "two");
        assert_eq!(ranked[1].era, "one");
        assert!((ranked[0].score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn free_text_is_discounted() {
        let snapshot = snapshot();
        let profile = snapshot.lookup("tiny").unwrap();
        let mut acc = EraAccumulator::new(profile);
        let config = InferenceConfig::default();
        acc.add(
            &profile.rules[0],
            &EvidenceToken::new("alpha", TokenKind::FreeText, 0, 0),
            &config,
        );
        acc.add(
            &profile.rules[1],
            &EvidenceToken::new("beta", TokenKind::Identifier, 0, 10),
            &config,
        );
        let (ranked, matched) = acc.finish();
        assert_eq!(ranked[0].era, "two");
        assert!((ranked[0].score - 2.0 / 3.0).abs() < 1e-12);
        assert!((matched[0].weight - 0.5).abs() < 1e-12);
    }
}
