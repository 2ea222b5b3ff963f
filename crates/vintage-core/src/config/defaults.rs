//! Compiled defaults for every config section.

pub const DEFAULT_MATCH_WEIGHT: f64 = 1.0;
pub const DEFAULT_FREE_TEXT_FACTOR: f64 = 0.5;
pub const DEFAULT_MAX_TOKENS_PER_FRAGMENT: usize = 256;
pub const DEFAULT_STRICT_AMBIGUITY: bool = false;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

/// Log levels accepted by `observability.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
