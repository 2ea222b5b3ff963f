use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use vintage_core::VintageConfig;
use vintage_engine::{AssessmentEngine, AssessmentRequest};
use vintage_registry::loader::SourceFormat;
use vintage_registry::RegistryStore;

fn engine() -> AssessmentEngine {
    let store = Arc::new(RegistryStore::default());
    store
        .reload_from_str(
            "sample_registry.toml",
            &test_fixtures::sample_registry_toml(),
            SourceFormat::Toml,
        )
        .unwrap();
    AssessmentEngine::new(store, &VintageConfig::default())
}

fn bench_assess_single(c: &mut Criterion) {
    let engine = engine();
    let evidence = [
        "\"react\": \"^19.0.0\"",
        "const [state, formAction] = useActionState(fn, null)",
        "TypeError: ReactDOM.render is not a function",
    ];

    c.bench_function("assess_single", |b| {
        b.iter(|| engine.assess("React", "ReactDOM.render", &evidence).unwrap())
    });
}

fn bench_assess_no_evidence(c: &mut Criterion) {
    let engine = engine();

    c.bench_function("assess_no_evidence", |b| {
        b.iter(|| engine.assess::<&str>("ExampleFW", "old-call", &[]).unwrap())
    });
}

fn bench_assess_batch(c: &mut Criterion) {
    let engine = engine();
    let requests: Vec<AssessmentRequest> = (0..64)
        .map(|i| {
            AssessmentRequest::new(
                if i % 2 == 0 { "React" } else { "openai" },
                "createRoot",
                vec![format!("useState({i}); createRoot(el)"), "openai==1.3.0".to_string()],
            )
        })
        .collect();

    c.bench_function("assess_batch_64", |b| b.iter(|| engine.assess_batch(&requests)));
}

criterion_group!(
    benches,
    bench_assess_single,
    bench_assess_no_evidence,
    bench_assess_batch
);
criterion_main!(benches);
