use std::sync::Mutex;

use vintage_core::config::*;
use vintage_core::errors::ConfigError;

/// Serializes tests that touch `VINTAGE_*` environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_vintage_env_vars() {
    for key in [
        "VINTAGE_LOG_LEVEL",
        "VINTAGE_JSON_LOGS",
        "VINTAGE_STRICT_AMBIGUITY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VintageConfig::from_toml("").unwrap();

    assert_eq!(config.inference.match_weight, 1.0);
    assert_eq!(config.inference.free_text_factor, 0.5);
    assert_eq!(config.collector.max_tokens_per_fragment, 256);
    assert!(!config.registry.strict_ambiguity);
    assert!(config.registry.profile_dirs.is_empty());
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
    assert_eq!(config, VintageConfig::default());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[inference]
free_text_factor = 0.25

[registry]
strict_ambiguity = true
profile_dirs = ["profiles", "local/profiles"]
"#;
    let config = VintageConfig::from_toml(toml).unwrap();
    assert_eq!(config.inference.free_text_factor, 0.25);
    // Non-overridden fields keep defaults
    assert_eq!(config.inference.match_weight, 1.0);
    assert!(config.registry.strict_ambiguity);
    assert_eq!(config.registry.profile_dirs.len(), 2);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = VintageConfig::from_toml("[inference\nmatch_weight = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn out_of_range_values_fail_validation() {
    let err = VintageConfig::from_toml("[inference]\nfree_text_factor = 1.5").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "inference.free_text_factor")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = VintageConfig::from_toml("[inference]\nmatch_weight = 0.0").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = VintageConfig::from_toml("[collector]\nmax_tokens_per_fragment = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = VintageConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap_err();
    assert!(err.to_string().contains("observability.log_level"));
}

#[test]
fn load_missing_file_reports_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("vintage.toml");
    let err = VintageConfig::load(&path).unwrap_err();
    match err {
        ConfigError::FileNotFound { path: p } => assert!(p.ends_with("vintage.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn env_overrides_beat_file_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_vintage_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("vintage.toml");
    std::fs::write(
        &path,
        "[observability]\nlog_level = \"warn\"\n\n[registry]\nstrict_ambiguity = false\n",
    )
    .unwrap();

    std::env::set_var("VINTAGE_LOG_LEVEL", "DEBUG");
    std::env::set_var("VINTAGE_STRICT_AMBIGUITY", "yes");
    std::env::set_var("VINTAGE_JSON_LOGS", "maybe");

    let config = VintageConfig::load(&path).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.registry.strict_ambiguity);
    // Unparseable booleans are ignored.
    assert!(!config.observability.json_logs);

    clear_vintage_env_vars();
}
