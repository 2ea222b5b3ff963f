//! Tracing setup: structured logging with span definitions.

pub mod spans;

use tracing_subscriber::EnvFilter;
use vintage_core::config::ObservabilityConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `false` when a
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let config = ObservabilityConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }

    #[test]
    fn span_names_match_macros() {
        let spans = [
            (crate::assess_span!("React", 1u64), spans::names::ASSESS),
            (crate::batch_span!(4usize, 1u64), spans::names::ASSESS_BATCH),
            (crate::reload_span!("profile_dirs"), spans::names::RELOAD),
        ];
        for (span, name) in spans {
            if let Some(meta) = span.metadata() {
                assert_eq!(meta.name(), name);
            }
        }
        assert_eq!(spans::names::PUBLISH, "vintage.publish");
    }
}
