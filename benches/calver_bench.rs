use calver_check::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn parse_inputs() -> Vec<&'static str> {
    vec![
        "2024.01.18.1",
        "v2024.12.31.999",
        "2024.1.18.1",
        "2024.13.18.1",
        "not-a-version",
        "v1.2.3",
    ]
}

fn parse_all(inputs: &[&str]) -> usize {
    inputs
        .iter()
        .filter_map(|input| CalVer::parse(input))
        .count()
}

/// A year of daily releases, a few per day, with some noise mixed in.
fn tag_history() -> Vec<String> {
    let start = Date::explicit(2023, 1, 1).unwrap();
    let mut tags = Vec::new();
    for (i, day) in start.iter_days().take(365).enumerate() {
        for micro in 1..=(i % 4 + 1) {
            tags.push(format!("v{}.{micro}", day.format("%Y.%m.%d")));
        }
        if i % 10 == 0 {
            tags.push(format!("release-{i}"));
        }
    }
    tags
}

fn criterion_benchmark(c: &mut Criterion) {
    let inputs = parse_inputs();
    c.bench_function("parse", |b| b.iter(|| parse_all(black_box(&inputs))));

    let tags = tag_history();
    let today = Date::explicit(2023, 12, 31).unwrap();
    c.bench_function("next_version_365_days", |b| {
        b.iter(|| next_version(black_box(&today), black_box(&tags)))
    });
    c.bench_function("latest_365_days", |b| b.iter(|| latest(black_box(&tags))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
