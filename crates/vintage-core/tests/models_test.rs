use vintage_core::models::*;

const PROFILE_TOML: &str = r#"
name = "ExampleFW"
category = "framework"
aliases = ["example-fw"]
tier = "active"

[[eras]]
label = "E1"
since = "1.0"

[[eras.facts]]
text = "old-call"
deprecated_in = "E2"

[[eras.signals]]
id = "e1-version"
pattern = { kind = "version", value = "1" }

[[eras]]
label = "E2"
since = "2.0"

[[eras.signals]]
id = "e2-version"
pattern = { kind = "version", value = "2" }

[[eras.signals]]
id = "e2-hook"
pattern = { kind = "identifier", value = "useThing" }
"#;

#[test]
fn profile_deserializes_from_toml_with_tier_alias() {
    let profile: TechnologyProfile = toml::from_str(PROFILE_TOML).unwrap();
    assert_eq!(profile.volatility_tier, VolatilityTier::Active);
    assert_eq!(profile.eras.len(), 2);
    assert_eq!(profile.era_index("E2"), Some(1));
    assert_eq!(profile.latest_era_index(), Some(1));
    assert_eq!(profile.eras[1].signal_rule_ids(), vec!["e2-version", "e2-hook"]);
    assert_eq!(
        profile.eras[0].facts[0].deprecated_in.as_deref(),
        Some("E2")
    );
    assert_eq!(profile.names().collect::<Vec<_>>(), vec!["ExampleFW", "example-fw"]);
    assert_eq!(profile.signal_rules().count(), 3);
}

#[test]
fn signal_pattern_uses_adjacent_tagging() {
    let pattern = SignalPattern::Identifier("useThing".into());
    let json = serde_json::to_value(&pattern).unwrap();
    assert_eq!(json["kind"], "identifier");
    assert_eq!(json["value"], "useThing");
    assert_eq!(pattern.key(), "identifier:useThing");
}

#[test]
fn signal_pattern_key_ignores_padding_and_call_parens() {
    assert_eq!(SignalPattern::Version(" 2 ".into()).key(), "version:2");
    assert_eq!(
        SignalPattern::Identifier("useThing()".into()).key(),
        SignalPattern::Identifier("useThing".into()).key()
    );
    // Literal text keeps its parentheses.
    assert_eq!(SignalPattern::Literal("f()".into()).key(), "literal:f()");
}

#[test]
fn conflict_kind_serializes_as_kebab_case_id() {
    for kind in [
        ConflictKind::DeprecatedButAssertedCurrent,
        ConflictKind::RemovedButAssertedPresent,
        ConflictKind::RenamedOrShifted,
        ConflictKind::VersionMismatchWithEvidence,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.id()));
    }
}

#[test]
fn claim_blankness_requires_both_fields_empty() {
    assert!(Claim::new("  ", "\t").is_blank());
    assert!(!Claim::new("", "SELECT syntax").is_blank());
    assert!(!Claim::new("StableDB", "").is_blank());
}

#[test]
fn empty_inference_reports_zero_score() {
    let inference = EraInference::no_evidence();
    assert!(inference.is_empty());
    assert_eq!(inference.winning_score(), 0.0);
    assert_eq!(
        EraInference::unknown_technology().outcome,
        InferenceOutcome::UnknownTechnology
    );
}
