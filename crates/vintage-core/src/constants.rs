/// Vintage system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Era score at or above which a Slow technology is stated with a version note.
pub const SLOW_TIER_SCORE_THRESHOLD: f64 = 0.5;

/// Era score at or above which an Active technology is qualified rather than reduced.
pub const ACTIVE_TIER_SCORE_THRESHOLD: f64 = 0.7;

/// Default drift windows per volatility tier, in days.
pub const GLACIAL_DRIFT_WINDOW_DAYS: i64 = 1095;
pub const SLOW_DRIFT_WINDOW_DAYS: i64 = 365;
pub const ACTIVE_DRIFT_WINDOW_DAYS: i64 = 84;
pub const RAPID_DRIFT_WINDOW_DAYS: i64 = 14;

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "VINTAGE_";
