//! AssessmentEngine: implements IAssessor, sequences the pipeline against
//! one registry snapshot and assembles the Assessment.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use vintage_core::config::{InferenceConfig, VintageConfig};
use vintage_core::errors::{VintageError, VintageResult};
use vintage_core::models::{Assessment, Claim, EraEstimate, InferenceOutcome};
use vintage_core::traits::IAssessor;
use vintage_evidence::EvidenceCollector;
use vintage_registry::{LoadReport, RegistrySnapshot, RegistryStore};

/// One entry of a batch assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub technology: String,
    pub claim: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl AssessmentRequest {
    pub fn new(
        technology: impl Into<String>,
        claim: impl Into<String>,
        evidence: Vec<String>,
    ) -> Self {
        Self {
            technology: technology.into(),
            claim: claim.into(),
            evidence,
        }
    }
}

/// Stateless assessment front end over a shared [`RegistryStore`].
///
/// Cheap to share across threads. Every call reads the snapshot once and
/// never sees a reload that happens while it runs.
pub struct AssessmentEngine {
    store: Arc<RegistryStore>,
    collector: EvidenceCollector,
    inference: InferenceConfig,
}

impl AssessmentEngine {
    pub fn new(store: Arc<RegistryStore>, config: &VintageConfig) -> Self {
        Self {
            store,
            collector: EvidenceCollector::new(config.collector.clone()),
            inference: config.inference.clone(),
        }
    }

    /// Build a store from `config.registry` and load its profile directories.
    pub fn from_config(config: &VintageConfig) -> VintageResult<Self> {
        let engine = Self::new(
            Arc::new(RegistryStore::new(config.registry.clone())),
            config,
        );
        if !config.registry.profile_dirs.is_empty() {
            engine.reload_configured()?;
        }
        tracing::info!(
            version = vintage_core::constants::VERSION,
            snapshot_version = engine.store.snapshot().version(),
            "assessment engine ready"
        );
        Ok(engine)
    }

    /// Load `vintage.toml`-style config from disk, then build from it.
    pub fn load(config_path: &Path) -> VintageResult<Self> {
        let config = VintageConfig::load(config_path)?;
        Self::from_config(&config)
    }

    pub fn store(&self) -> &Arc<RegistryStore> {
        &self.store
    }

    /// Reload every configured profile directory as one batch.
    pub fn reload_configured(&self) -> VintageResult<LoadReport> {
        let span = crate::reload_span!("profile_dirs");
        let _enter = span.enter();
        Ok(self.store.reload_configured()?)
    }

    /// Assess `claim` about `technology` against the current snapshot.
    pub fn assess<S: AsRef<str>>(
        &self,
        technology: &str,
        claim: &str,
        evidence: &[S],
    ) -> VintageResult<Assessment> {
        let snapshot = self.store.snapshot();
        self.assess_with_snapshot(&snapshot, technology, claim, evidence)
    }

    pub fn assess_claim<S: AsRef<str>>(
        &self,
        claim: &Claim,
        evidence: &[S],
    ) -> VintageResult<Assessment> {
        self.assess(&claim.technology, &claim.fact, evidence)
    }

    /// Assess many requests in parallel, all against the snapshot current
    /// at the start of the batch. Results keep request order.
    pub fn assess_batch(&self, requests: &[AssessmentRequest]) -> Vec<VintageResult<Assessment>> {
        let snapshot = self.store.snapshot();
        let span = crate::batch_span!(requests.len(), snapshot.version());
        let _enter = span.enter();

        requests
            .par_iter()
            .map(|r| self.assess_with_snapshot(&snapshot, &r.technology, &r.claim, &r.evidence))
            .collect()
    }

    /// The whole pipeline against an explicit snapshot. Performs no I/O.
    pub fn assess_with_snapshot<S: AsRef<str>>(
        &self,
        snapshot: &RegistrySnapshot,
        technology: &str,
        claim: &str,
        evidence: &[S],
    ) -> VintageResult<Assessment> {
        let claim = Claim::new(technology.trim(), claim.trim());
        if claim.is_blank() {
            return Err(VintageError::InvalidInput {
                reason: "technology and claim are both blank".to_string(),
            });
        }

        let span = crate::assess_span!(claim.technology, snapshot.version());
        let _enter = span.enter();

        let tokens = self.collector.collect(evidence);
        let compiled = snapshot.lookup(&claim.technology);
        let inference = vintage_inference::infer(compiled, &tokens, &self.inference);

        let assessment = match compiled {
            None => {
                let (confidence, response_pattern) = vintage_classifier::classify(None, 0.0, &[]);
                Assessment {
                    technology: technology.to_string(),
                    canonical_name: None,
                    claim: claim.fact.clone(),
                    volatility_tier: None,
                    drift_window_days: None,
                    inferred_era: None,
                    inference_outcome: InferenceOutcome::UnknownTechnology,
                    era_ranking: Vec::new(),
                    matched_signals: Vec::new(),
                    conflicts: Vec::new(),
                    confidence,
                    response_pattern,
                    snapshot_version: snapshot.version(),
                    snapshot_fingerprint: snapshot.fingerprint().to_string(),
                }
            }
            Some(compiled) => {
                let profile = &compiled.profile;

                // Without evidence, assume the most recent known era at score 0.
                let era_index = inference
                    .winner()
                    .map(|w| w.era_index)
                    .or_else(|| profile.latest_era_index());
                let score = inference.winning_score();

                let conflicts = era_index
                    .map(|x| vintage_conflict::detect(profile, &claim, x))
                    .unwrap_or_default();
                let (confidence, response_pattern) =
                    vintage_classifier::classify(Some(profile.volatility_tier), score, &conflicts);

                Assessment {
                    technology: technology.to_string(),
                    canonical_name: Some(profile.name.clone()),
                    claim: claim.fact.clone(),
                    volatility_tier: Some(profile.volatility_tier),
                    drift_window_days: Some(profile.acceptable_drift_window().num_days()),
                    inferred_era: era_index.map(|i| EraEstimate {
                        label: profile.eras[i].label.clone(),
                        score,
                    }),
                    inference_outcome: inference.outcome,
                    era_ranking: inference.ranked,
                    matched_signals: inference.matched,
                    conflicts,
                    confidence,
                    response_pattern,
                    snapshot_version: snapshot.version(),
                    snapshot_fingerprint: snapshot.fingerprint().to_string(),
                }
            }
        };

        tracing::debug!(
            outcome = ?assessment.inference_outcome,
            era = assessment.inferred_era.as_ref().map(|e| e.label.as_str()).unwrap_or("-"),
            conflicts = assessment.conflicts.len(),
            confidence = %assessment.confidence,
            pattern = %assessment.response_pattern,
            "assessment complete"
        );
        Ok(assessment)
    }
}

impl IAssessor for AssessmentEngine {
    fn assess(
        &self,
        technology: &str,
        claim: &str,
        evidence: &[String],
    ) -> VintageResult<Assessment> {
        AssessmentEngine::assess(self, technology, claim, evidence)
    }
}
