//! Atomic snapshot publication.

use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use serde::Serialize;

use vintage_core::config::RegistryConfig;
use vintage_core::errors::{RegistryLoadError, RegistryWarning};
use vintage_core::models::TechnologyProfile;

use crate::loader::{self, SourceFormat};
use crate::snapshot::RegistrySnapshot;

/// Span opened around each snapshot build.
pub const PUBLISH_SPAN: &str = "vintage.publish";

/// Summary of a successful load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub version: u64,
    pub technologies: usize,
    pub rules: usize,
    pub fingerprint: String,
    pub warnings: Vec<RegistryWarning>,
}

/// Holds the current registry snapshot.
///
/// Readers call [`RegistryStore::snapshot`] and keep the returned `Arc` for the
/// whole assessment. Writers build a complete snapshot off to the side and
/// swap it in; a rejected batch leaves the current snapshot untouched.
pub struct RegistryStore {
    current: ArcSwap<RegistrySnapshot>,
    config: RegistryConfig,
    /// Serializes writers so versions stay strictly increasing.
    reload_guard: Mutex<()>,
}

impl RegistryStore {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(RegistrySnapshot::empty()),
            config,
            reload_guard: Mutex::new(()),
        }
    }

    /// Current snapshot. Never blocks.
    pub fn snapshot(&self) -> Arc<RegistrySnapshot> {
        self.current.load_full()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Validate a batch and publish it as the new snapshot.
    pub fn publish(
        &self,
        profiles: Vec<TechnologyProfile>,
    ) -> Result<LoadReport, RegistryLoadError> {
        let _guard = self
            .reload_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let version = self.current.load().version() + 1;
        let span = tracing::info_span!(PUBLISH_SPAN, version, batch = profiles.len());
        let _enter = span.enter();

        let (snapshot, warnings) = match RegistrySnapshot::build(profiles, version, &self.config)
        {
            Ok(built) => built,
            Err(e) => {
                tracing::warn!(error = %e, "registry batch rejected; keeping previous snapshot");
                return Err(e);
            }
        };

        for warning in &warnings {
            tracing::warn!(%warning, "registry load warning");
        }

        let report = LoadReport {
            version,
            technologies: snapshot.len(),
            rules: snapshot.rule_count(),
            fingerprint: snapshot.fingerprint().to_string(),
            warnings,
        };
        self.current.store(Arc::new(snapshot));

        tracing::info!(
            version,
            technologies = report.technologies,
            rules = report.rules,
            warnings = report.warnings.len(),
            "registry snapshot published"
        );
        Ok(report)
    }

    /// Parse a TOML or JSON document and publish it.
    pub fn reload_from_str(
        &self,
        source_name: &str,
        content: &str,
        format: SourceFormat,
    ) -> Result<LoadReport, RegistryLoadError> {
        let profiles = loader::parse_document(source_name, content, format)?;
        self.publish(profiles)
    }

    /// Load every profile file under `dirs` and publish them as one batch.
    pub fn reload_from_dirs<P: AsRef<std::path::Path>>(
        &self,
        dirs: &[P],
    ) -> Result<LoadReport, RegistryLoadError> {
        let mut profiles = Vec::new();
        for dir in dirs {
            profiles.extend(loader::load_dir(dir.as_ref())?);
        }
        self.publish(profiles)
    }

    /// Reload from the directories named in the registry config.
    pub fn reload_configured(&self) -> Result<LoadReport, RegistryLoadError> {
        let dirs = self.config.profile_dirs.clone();
        self.reload_from_dirs(&dirs)
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
