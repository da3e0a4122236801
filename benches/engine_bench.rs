use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use stencil::{extract_variables, render_preview, substitute, sync, VariableDefinition};

fn benchmark_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    let mut values: HashMap<&str, &str> = HashMap::new();
    values.insert("user", "tentacles");
    values.insert("host", "localhost");
    values.insert("port", "8080");

    group.bench_function("extract_simple", |b| {
        b.iter(|| extract_variables(black_box("Hello {{user}}")))
    });

    group.bench_function("substitute_multiple_vars", |b| {
        b.iter(|| substitute(black_box("Connect to {{user}}@{{host}}:{{port}}"), &values))
    });

    group.bench_function("preview_multiple_vars", |b| {
        b.iter(|| render_preview(black_box("Connect to {{user}}@{{host}}:{{port}}"), &values))
    });

    // Keystroke path: re-sync a held definition list against edited text
    let held: Vec<VariableDefinition> = sync(&[], "Connect to {{user}}@{{host}}:{{port}}");
    group.bench_function("sync_on_edit", |b| {
        b.iter(|| sync(&held, black_box("Connect to {{user}}@{{host}}:{{port}} now")))
    });

    // Large payload
    let mut large_values: HashMap<String, String> = HashMap::new();
    let mut large_payload = String::new();
    for i in 0..100 {
        large_values.insert(format!("key_{}", i), format!("value_{}", i));
        large_payload.push_str(&format!("Key {}: {{{{key_{}}}}}\n", i, i));
    }

    group.bench_function("substitute_large_payload_100_vars", |b| {
        b.iter(|| substitute(black_box(&large_payload), &large_values))
    });

    group.bench_function("sync_large_payload_100_vars", |b| {
        let held = sync(&[], &large_payload);
        b.iter(|| sync(&held, black_box(&large_payload)))
    });

    // No-op (literal)
    group.bench_function("substitute_literal_noop", |b| {
        b.iter(|| substitute(black_box("Just a plain string without variables"), &values))
    });

    group.finish();
}

criterion_group!(benches, benchmark_engine);
criterion_main!(benches);
