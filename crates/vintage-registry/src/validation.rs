//! Whole-batch validation of technology profiles.
//!
//! Validation also normalizes the batch: every signal rule is stamped with
//! its owning technology and target era.

use std::collections::{BTreeMap, HashMap, HashSet};

use vintage_core::config::RegistryConfig;
use vintage_core::errors::{RegistryLoadError, RegistryWarning};
use vintage_core::models::version::version_segments;
use vintage_core::models::{TechnologyProfile, VolatilityTier};

/// Validate and normalize a batch. Returns soft findings on success.
pub fn validate_batch(
    profiles: &mut [TechnologyProfile],
    config: &RegistryConfig,
) -> Result<Vec<RegistryWarning>, RegistryLoadError> {
    let mut warnings = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for profile in profiles.iter_mut() {
        if profile.name.trim().is_empty() {
            return Err(RegistryLoadError::EmptyName);
        }
        // Names of one profile may repeat each other (`React` / `react`);
        // only collisions with other profiles are errors.
        let mut own_names: HashSet<String> = HashSet::new();
        for name in profile.names() {
            let key = lookup_key(name);
            if !own_names.insert(key.clone()) {
                continue;
            }
            if !seen_names.insert(key) {
                return Err(RegistryLoadError::DuplicateTechnology {
                    name: name.to_string(),
                });
            }
        }

        check_eras(profile)?;
        check_facts(profile)?;
        stamp_rules(profile)?;
        warnings.extend(check_signals(profile, config)?);
    }

    Ok(warnings)
}

/// Key used for case-insensitive technology lookup.
pub fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn check_eras(profile: &TechnologyProfile) -> Result<(), RegistryLoadError> {
    if profile.eras.is_empty() && profile.volatility_tier > VolatilityTier::Glacial {
        return Err(RegistryLoadError::MissingEras {
            technology: profile.name.clone(),
            tier: profile.volatility_tier.to_string(),
        });
    }

    let mut labels: HashSet<&str> = HashSet::new();
    // Non-numeric `since` values carry no ordering information and are skipped.
    let mut previous: Option<(&str, Vec<u64>)> = None;
    for era in &profile.eras {
        if !labels.insert(era.label.as_str()) {
            return Err(RegistryLoadError::DuplicateEra {
                technology: profile.name.clone(),
                era: era.label.clone(),
            });
        }
        let Some(segments) = era.since.as_deref().and_then(version_segments) else {
            continue;
        };
        if let Some((earlier, earlier_segments)) = &previous {
            if segments <= *earlier_segments {
                return Err(RegistryLoadError::NonChronologicalEras {
                    technology: profile.name.clone(),
                    earlier: earlier.to_string(),
                    later: era.label.clone(),
                });
            }
        }
        previous = Some((era.label.as_str(), segments));
    }
    Ok(())
}

fn check_facts(profile: &TechnologyProfile) -> Result<(), RegistryLoadError> {
    let mut introduced: HashMap<String, usize> = HashMap::new();

    for (index, era) in profile.eras.iter().enumerate() {
        for fact in &era.facts {
            if introduced.insert(fact.normalized(), index).is_some() {
                return Err(RegistryLoadError::DuplicateFact {
                    technology: profile.name.clone(),
                    fact: fact.text.clone(),
                });
            }

            let marker = |label: &Option<String>| -> Result<Option<usize>, RegistryLoadError> {
                match label {
                    None => Ok(None),
                    Some(l) => profile.era_index(l).map(Some).ok_or_else(|| {
                        RegistryLoadError::UnknownEraMarker {
                            technology: profile.name.clone(),
                            fact: fact.text.clone(),
                            era: l.clone(),
                        }
                    }),
                }
            };
            let deprecated = marker(&fact.deprecated_in)?;
            let removed = marker(&fact.removed_in)?;

            let ordered = deprecated.map_or(true, |d| index <= d)
                && removed.map_or(true, |r| index <= r)
                && match (deprecated, removed) {
                    (Some(d), Some(r)) => d <= r,
                    _ => true,
                };
            if !ordered {
                return Err(RegistryLoadError::FactOrdering {
                    technology: profile.name.clone(),
                    fact: fact.text.clone(),
                });
            }
        }
    }
    Ok(())
}

fn stamp_rules(profile: &mut TechnologyProfile) -> Result<(), RegistryLoadError> {
    let technology = profile.name.clone();
    let mut ids: HashSet<String> = HashSet::new();

    for era in profile.eras.iter_mut() {
        for rule in era.signals.iter_mut() {
            if !ids.insert(rule.id.clone()) {
                return Err(RegistryLoadError::DuplicateRule {
                    technology,
                    rule: rule.id.clone(),
                });
            }
            if rule.pattern.normalized_value().is_empty() {
                return Err(RegistryLoadError::EmptyPattern {
                    technology,
                    rule: rule.id.clone(),
                });
            }
            rule.technology = technology.clone();
            rule.era = era.label.clone();
        }
    }
    Ok(())
}

fn check_signals(
    profile: &TechnologyProfile,
    config: &RegistryConfig,
) -> Result<Vec<RegistryWarning>, RegistryLoadError> {
    let mut warnings = Vec::new();

    // pattern key -> eras claiming it, in first-seen order
    let mut claims: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for rule in profile.signal_rules() {
        let eras = claims.entry(rule.pattern.key()).or_default();
        if !eras.contains(&rule.era) {
            eras.push(rule.era.clone());
        }
    }

    for (pattern, eras) in claims {
        if eras.len() < 2 {
            continue;
        }
        if config.strict_ambiguity {
            return Err(RegistryLoadError::AmbiguousSignal {
                technology: profile.name.clone(),
                pattern,
                eras,
            });
        }
        warnings.push(RegistryWarning::AmbiguousSignal {
            technology: profile.name.clone(),
            pattern,
            eras,
        });
    }

    for era in &profile.eras {
        if era.signals.is_empty() && era.facts.is_empty() {
            warnings.push(RegistryWarning::EmptyEra {
                technology: profile.name.clone(),
                era: era.label.clone(),
            });
        }
    }

    Ok(warnings)
}
