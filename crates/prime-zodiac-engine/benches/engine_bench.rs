//! Engine benchmark suite.
//!
//! Everything here is O(1) or O(pairs); the benches exist to catch
//! accidental regressions in the hot conversion and classification paths.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use prime_zodiac_engine::aspect::{minimal_separation, AspectMatcher, BodyPosition};
use prime_zodiac_engine::bridge::SpaceTimeBridge;
use prime_zodiac_engine::calendar::CalendarMapper;
use prime_zodiac_engine::degree::{resolve_phase, to_prime_degree};
use prime_zodiac_engine::ternary::bijective;

fn chart(count: usize) -> Vec<BodyPosition> {
    (0..count)
        .map(|i| BodyPosition::new(&format!("body-{i}"), (i as f64 * 37.3) % 360.0))
        .collect()
}

fn bench_to_prime_degree(c: &mut Criterion) {
    c.bench_function("to_prime_degree", |b| {
        b.iter(|| to_prime_degree(black_box(123.456)))
    });
}

fn bench_resolve_phase(c: &mut Criterion) {
    c.bench_function("resolve_phase", |b| {
        b.iter(|| resolve_phase(black_box(200.5)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let matcher = AspectMatcher::with_defaults();
    c.bench_function("classify_separation", |b| {
        b.iter(|| matcher.classify(black_box(91.2)))
    });
}

fn bench_all_aspects(c: &mut Criterion) {
    let matcher = AspectMatcher::with_defaults();
    let positions = chart(10);
    c.bench_function("all_aspects_10_bodies", |b| {
        b.iter(|| matcher.all_aspects(black_box(&positions)))
    });
}

fn bench_minimal_separation(c: &mut Criterion) {
    c.bench_function("minimal_separation", |b| {
        b.iter(|| minimal_separation(black_box(10.0), black_box(350.0)))
    });
}

fn bench_map_date(c: &mut Criterion) {
    let mapper = CalendarMapper::with_defaults();
    let date = NaiveDate::from_ymd_opt(2024, 8, 15).expect("valid date");
    c.bench_function("map_date", |b| b.iter(|| mapper.map_date(black_box(date))));
}

fn bench_bridge(c: &mut Criterion) {
    let bridge = SpaceTimeBridge::with_defaults();
    c.bench_function("bridge_descriptor", |b| {
        b.iter(|| bridge.bridge(black_box(200.5)))
    });
}

fn bench_bijective_round_trip(c: &mut Criterion) {
    c.bench_function("bijective_encode_decode_10000", |b| {
        b.iter(|| bijective::decode(black_box(&bijective::encode(black_box(10_000)))))
    });
}

criterion_group!(
    benches,
    bench_to_prime_degree,
    bench_resolve_phase,
    bench_classify,
    bench_all_aspects,
    bench_minimal_separation,
    bench_map_date,
    bench_bridge,
    bench_bijective_round_trip
);
criterion_main!(benches);
