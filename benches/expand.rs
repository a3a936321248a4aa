//! Benchmarks for the gradx expansion engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradx::theme::Theme;
use gradx::{generate, normalize, ColourSpec, CollectedUtilities};

/// A theme with `colours` colour entries per family and a handful of
/// repeating lengths, to exercise the full Cartesian product.
fn synthetic_theme(colours: usize) -> Theme {
    let mut yaml = String::from("linear:\n  colors:\n");
    for i in 0..colours {
        yaml.push_str(&format!("    c{}: \"#{:06x}\"\n", i, i * 7919));
    }
    yaml.push_str("radial:\n  colors:\n");
    for i in 0..colours {
        yaml.push_str(&format!("    c{}: \"#{:06x}\"\n", i, i * 7919));
    }
    yaml.push_str("repeating-linear:\n  lengths:\n    sm: 8px\n    md: 16px\n    lg: 32px\n");
    yaml.push_str("repeating-radial:\n  lengths:\n    sm: 8px\n    md: 16px\n    lg: 32px\n");

    Theme::parse(&yaml).unwrap()
}

// -- Normalization benchmarks --

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let single = ColourSpec::Single("#3490dc".to_string());
    let named = ColourSpec::Single("rebeccapurple".to_string());
    let stops = ColourSpec::Stops(vec![
        "#3490dc".to_string(),
        "gold".to_string(),
        "transparent".to_string(),
    ]);

    group.bench_function("single_hex", |b| {
        b.iter(|| normalize(black_box(&single), true))
    });

    group.bench_function("single_named", |b| {
        b.iter(|| normalize(black_box(&named), false))
    });

    group.bench_function("explicit_stops", |b| {
        b.iter(|| normalize(black_box(&stops), true))
    });

    group.finish();
}

// -- Expansion benchmarks --

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let small = synthetic_theme(4);
    let large = synthetic_theme(64);

    group.bench_function("theme_4_colours", |b| {
        b.iter(|| {
            let mut sink = CollectedUtilities::new();
            generate(black_box(&small), &mut sink);
            sink
        })
    });

    group.bench_function("theme_64_colours", |b| {
        b.iter(|| {
            let mut sink = CollectedUtilities::new();
            generate(black_box(&large), &mut sink);
            sink
        })
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_generate);
criterion_main!(benches);
