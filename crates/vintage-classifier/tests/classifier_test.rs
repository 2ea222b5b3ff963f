use proptest::prelude::*;
use vintage_classifier::{classify, explain, DECISION_TABLE};
use vintage_core::models::{ConfidenceLevel as L, Conflict, ConflictKind, ResponsePattern as P, VolatilityTier as T};

fn conflict(kind: ConflictKind) -> Conflict {
    Conflict {
        kind,
        fact: "f".to_string(),
        fact_era: "a".to_string(),
        inferred_era: "b".to_string(),
        marker_era: None,
        description: String::new(),
    }
}

#[test]
fn table_rows_in_order() {
    use ConflictKind::*;
    let cases: Vec<(Option<T>, f64, Vec<Conflict>, L, P)> = vec![
        (Some(T::Glacial), 1.0, vec![conflict(RemovedButAssertedPresent)], L::Low, P::HedgeAndCorrect),
        (Some(T::Rapid), 1.0, vec![conflict(DeprecatedButAssertedCurrent)], L::Low, P::QualifyWithVersion),
        (Some(T::Slow), 1.0, vec![conflict(VersionMismatchWithEvidence)], L::Low, P::QualifyWithVersion),
        (Some(T::Glacial), 0.0, vec![], L::High, P::StateDirectly),
        (Some(T::Slow), 0.5, vec![], L::High, P::StateWithVersionNote),
        (Some(T::Slow), 0.49, vec![], L::Medium, P::QualifyWithVersion),
        (Some(T::Active), 0.7, vec![], L::Medium, P::QualifyHeavily),
        (Some(T::Active), 0.69, vec![], L::Low, P::ProvideStableCoreOnly),
        (Some(T::Rapid), 1.0, vec![], L::Low, P::GeneralPatternOnly),
        (None, 0.0, vec![], L::Unknown, P::DeferToUserEnvironment),
        (Some(T::Glacial), 1.0, vec![conflict(RenamedOrShifted)], L::Medium, P::QualifyWithVersion),
        (Some(T::Slow), 0.0, vec![conflict(RenamedOrShifted)], L::Medium, P::QualifyWithVersion),
    ];
    for (tier, score, conflicts, level, pattern) in cases {
        assert_eq!(
            classify(tier, score, &conflicts),
            (level, pattern),
            "tier {tier:?}, score {score}, conflicts {conflicts:?}"
        );
    }
}

#[test]
fn removal_outranks_deprecation() {
    let conflicts = vec![
        conflict(ConflictKind::DeprecatedButAssertedCurrent),
        conflict(ConflictKind::RemovedButAssertedPresent),
    ];
    assert_eq!(explain(Some(T::Active), 1.0, &conflicts), 0);
}

#[test]
fn shifted_facts_do_not_change_active_or_rapid_rows() {
    let shifted = vec![conflict(ConflictKind::RenamedOrShifted)];
    assert_eq!(classify(Some(T::Active), 0.9, &shifted), (L::Medium, P::QualifyHeavily));
    assert_eq!(classify(Some(T::Rapid), 0.9, &shifted), (L::Low, P::GeneralPatternOnly));
    assert_eq!(DECISION_TABLE[explain(Some(T::Slow), 0.9, &shifted)].name, "stable-shifted");
}

#[test]
fn nan_score_falls_in_the_lower_band() {
    assert_eq!(classify(Some(T::Active), f64::NAN, &[]), (L::Low, P::ProvideStableCoreOnly));
}

fn any_tier() -> impl Strategy<Value = Option<T>> {
    prop_oneof![
        Just(None),
        Just(Some(T::Glacial)),
        Just(Some(T::Slow)),
        Just(Some(T::Active)),
        Just(Some(T::Rapid)),
    ]
}

fn any_kind() -> impl Strategy<Value = ConflictKind> {
    prop_oneof![
        Just(ConflictKind::DeprecatedButAssertedCurrent),
        Just(ConflictKind::RemovedButAssertedPresent),
        Just(ConflictKind::RenamedOrShifted),
        Just(ConflictKind::VersionMismatchWithEvidence),
    ]
}

proptest! {
    #[test]
    fn glacial_without_conflicts_is_stated_directly(score in 0.0f64..=1.0) {
        prop_assert_eq!(classify(Some(T::Glacial), score, &[]), (L::High, P::StateDirectly));
    }

    #[test]
    fn some_row_always_fires(
        tier in any_tier(),
        score in 0.0f64..=1.0,
        kinds in proptest::collection::vec(any_kind(), 0..4),
    ) {
        let conflicts: Vec<Conflict> = kinds.into_iter().map(conflict).collect();
        let signals = vintage_classifier::Signals::new(tier, score, &conflicts);
        prop_assert!(DECISION_TABLE.iter().any(|row| (row.when)(&signals)));
    }

    #[test]
    fn removed_fact_always_hedges(tier in any_tier(), score in 0.0f64..=1.0) {
        let conflicts = vec![conflict(ConflictKind::RemovedButAssertedPresent)];
        prop_assert_eq!(classify(tier, score, &conflicts), (L::Low, P::HedgeAndCorrect));
    }
}
