use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants;

/// How fast a technology's public surface changes. Ordered slowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityTier {
    /// Standards and protocols that barely move (SQL, POSIX, HTTP/1.1).
    Glacial,
    /// Mature libraries with rare breaking releases.
    Slow,
    /// Frameworks with regular breaking majors.
    Active,
    /// Fast-moving SDKs and tooling.
    Rapid,
}

impl VolatilityTier {
    pub const ALL: [VolatilityTier; 4] = [Self::Glacial, Self::Slow, Self::Active, Self::Rapid];

    /// How long knowledge about this tier stays acceptable without re-checking.
    pub fn default_drift_window(self) -> Duration {
        let days = match self {
            Self::Glacial => constants::GLACIAL_DRIFT_WINDOW_DAYS,
            Self::Slow => constants::SLOW_DRIFT_WINDOW_DAYS,
            Self::Active => constants::ACTIVE_DRIFT_WINDOW_DAYS,
            Self::Rapid => constants::RAPID_DRIFT_WINDOW_DAYS,
        };
        Duration::days(days)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Glacial => "glacial",
            Self::Slow => "slow",
            Self::Active => "active",
            Self::Rapid => "rapid",
        }
    }
}

impl fmt::Display for VolatilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_slowest_first() {
        assert!(VolatilityTier::Glacial < VolatilityTier::Slow);
        assert!(VolatilityTier::Slow < VolatilityTier::Active);
        assert!(VolatilityTier::Active < VolatilityTier::Rapid);
    }

    #[test]
    fn drift_window_shrinks_with_volatility() {
        let windows: Vec<Duration> = VolatilityTier::ALL
            .iter()
            .map(|t| t.default_drift_window())
            .collect();
        assert!(windows.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(VolatilityTier::Rapid.default_drift_window(), Duration::weeks(2));
    }
}
