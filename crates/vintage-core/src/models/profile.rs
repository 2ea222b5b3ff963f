use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{SignalRule, VolatilityTier};

/// Catalog entry for one technology.
///
/// Profiles are created by registry maintenance and are read-only to the
/// engine; the registry validates them before publishing a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyProfile {
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Alternative names resolving to this profile (case-insensitive).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(alias = "tier")]
    pub volatility_tier: VolatilityTier,
    /// Overrides the tier's default drift window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift_window_days: Option<u32>,
    /// Eras, oldest first.
    #[serde(default)]
    pub eras: Vec<Era>,
}

impl TechnologyProfile {
    pub fn acceptable_drift_window(&self) -> Duration {
        match self.drift_window_days {
            Some(days) => Duration::days(i64::from(days)),
            None => self.volatility_tier.default_drift_window(),
        }
    }

    pub fn era_index(&self, label: &str) -> Option<usize> {
        self.eras.iter().position(|e| e.label == label)
    }

    /// Index of the most recent era, `None` for an era-less profile.
    pub fn latest_era_index(&self) -> Option<usize> {
        self.eras.len().checked_sub(1)
    }

    /// All signal rules of this technology, in era order.
    pub fn signal_rules(&self) -> impl Iterator<Item = &SignalRule> {
        self.eras.iter().flat_map(|e| e.signals.iter())
    }

    /// Every name the profile answers to, canonical name first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// A bounded period of a technology's life with a consistent API shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Era {
    pub label: String,
    /// First version of the era, used to check chronological order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Signals characteristic of this era.
    #[serde(default)]
    pub signals: Vec<SignalRule>,
    /// Facts introduced (known-true) in this era.
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl Era {
    pub fn signal_rule_ids(&self) -> Vec<&str> {
        self.signals.iter().map(|s| s.id.as_str()).collect()
    }
}

/// A claim known-true from the era that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_in: Option<String>,
}

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            deprecated_in: None,
            removed_in: None,
        }
    }

    pub fn deprecated_in(mut self, era: impl Into<String>) -> Self {
        self.deprecated_in = Some(era.into());
        self
    }

    pub fn removed_in(mut self, era: impl Into<String>) -> Self {
        self.removed_in = Some(era.into());
        self
    }

    pub fn normalized(&self) -> String {
        normalize_fact_text(&self.text)
    }
}

/// Lowercase, trim, and collapse internal whitespace.
pub fn normalize_fact_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
