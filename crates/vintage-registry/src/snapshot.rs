//! Immutable compiled registry.

use std::collections::HashMap;
use std::sync::Arc;

use vintage_core::config::RegistryConfig;
use vintage_core::errors::{RegistryLoadError, RegistryWarning};
use vintage_core::models::{SignalRule, TechnologyProfile};

use crate::matcher::TokenMatcher;
use crate::validation::{self, lookup_key};

/// A signal rule bound to its era position and compiled matcher.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: SignalRule,
    pub era_index: usize,
    pub matcher: TokenMatcher,
}

/// A validated profile together with its compiled rule set.
#[derive(Debug, Clone)]
pub struct CompiledProfile {
    pub profile: TechnologyProfile,
    /// Rules in era order, then declaration order.
    pub rules: Vec<CompiledRule>,
}

impl CompiledProfile {
    fn compile(profile: TechnologyProfile) -> Result<Self, RegistryLoadError> {
        let mut rules = Vec::new();
        for (era_index, era) in profile.eras.iter().enumerate() {
            for rule in &era.signals {
                let matcher = TokenMatcher::compile(&rule.pattern).map_err(|message| {
                    RegistryLoadError::InvalidPattern {
                        technology: profile.name.clone(),
                        rule: rule.id.clone(),
                        message,
                    }
                })?;
                rules.push(CompiledRule {
                    rule: rule.clone(),
                    era_index,
                    matcher,
                });
            }
        }
        Ok(Self { profile, rules })
    }
}

/// Immutable, versioned view of the registry used for one or more assessments.
#[derive(Debug)]
pub struct RegistrySnapshot {
    version: u64,
    fingerprint: String,
    profiles: Vec<Arc<CompiledProfile>>,
    /// Lowercased name or alias -> position in `profiles`.
    index: HashMap<String, usize>,
}

impl RegistrySnapshot {
    /// The snapshot published before any load: knows no technologies.
    pub fn empty() -> Self {
        Self {
            version: 0,
            fingerprint: blake3::hash(b"[]").to_hex().to_string(),
            profiles: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Validate, normalize, and compile a batch into a snapshot.
    pub fn build(
        mut profiles: Vec<TechnologyProfile>,
        version: u64,
        config: &RegistryConfig,
    ) -> Result<(Self, Vec<RegistryWarning>), RegistryLoadError> {
        let warnings = validation::validate_batch(&mut profiles, config)?;

        let canonical =
            serde_json::to_vec(&profiles).map_err(|e| RegistryLoadError::Parse {
                source_name: "<fingerprint>".to_string(),
                message: e.to_string(),
            })?;
        let fingerprint = blake3::hash(&canonical).to_hex().to_string();

        let mut compiled = Vec::with_capacity(profiles.len());
        let mut index = HashMap::new();
        for profile in profiles {
            let position = compiled.len();
            for name in profile.names() {
                index.insert(lookup_key(name), position);
            }
            compiled.push(Arc::new(CompiledProfile::compile(profile)?));
        }

        Ok((
            Self {
                version,
                fingerprint,
                profiles: compiled,
                index,
            },
            warnings,
        ))
    }

    /// Case-insensitive lookup by name or alias.
    pub fn lookup(&self, technology: &str) -> Option<&CompiledProfile> {
        self.index
            .get(&lookup_key(technology))
            .map(|&i| self.profiles[i].as_ref())
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// blake3 of the canonical JSON of the normalized batch.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.profiles.iter().map(|p| p.rules.len()).sum()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &TechnologyProfile> {
        self.profiles.iter().map(|p| &p.profile)
    }
}
