//! Cross-component integration tests: degree, aspect, calendar and bridge
//! working against the shared 13 × 28 geometry.

use chrono::NaiveDate;

use prime_zodiac_engine::aspect::{minimal_separation, AspectMatcher, BodyPosition};
use prime_zodiac_engine::bridge::SpaceTimeBridge;
use prime_zodiac_engine::calendar::{CalendarMapper, CalendarPosition};
use prime_zodiac_engine::degree::{resolve_phase, to_prime_degree};
use prime_zodiac_engine::ternary::bijective;
use prime_zodiac_engine::Resonance;

#[test]
fn ring_origin_describes_ares_prime_magnetic() {
    let bridge = SpaceTimeBridge::with_defaults();
    let descriptor = bridge.bridge(0.0).expect("default tables");

    assert_eq!(descriptor.phase_number, 1);
    assert_eq!(descriptor.spatial_name, "Ares Prime");
    assert_eq!(descriptor.temporal_name, "Magnetic");
    assert_eq!(descriptor.day_in_phase, 1);

    let phase = resolve_phase(0.0);
    assert_eq!(phase.phase_number, 1);
    assert_eq!(phase.degree_in_phase, 0.0);
}

#[test]
fn opposition_spans_six_phases_into_completion() {
    let separation = minimal_separation(0.0, 180.0);
    assert_eq!(separation, 182.0);

    let matched = AspectMatcher::with_defaults()
        .classify(separation)
        .expect("exact opposition");
    assert_eq!(matched.name, "opposition");
    assert_eq!(matched.phase_count, 6);
    assert_eq!(matched.resonance, Resonance::Completion);
}

#[test]
fn phase_thirteen_carries_the_triple_one_label() {
    // Tropical 355 scales past the 336-degree cusp of phase 13
    let prime = to_prime_degree(355.0);
    let descriptor = SpaceTimeBridge::with_defaults()
        .bridge(prime)
        .expect("default tables");

    assert_eq!(descriptor.phase_number, 13);
    assert_eq!(descriptor.ternary_label, "111");
    assert_eq!(bijective::decode(&bijective::encode(13)), 13);
}

#[test]
fn spatial_and_temporal_phases_agree() {
    // Day 56 of the year and degree 56 of the ring both open phase 3
    let mapper = CalendarMapper::with_defaults();
    let epoch = NaiveDate::from_ymd_opt(2023, 4, 1).expect("valid date");
    let day_56 = epoch + chrono::Duration::days(56);

    let position = mapper.map_date(day_56).expect("in range");
    let (calendar_phase, day_in_phase) = match position {
        CalendarPosition::Regular {
            phase_number,
            day_in_phase,
            ..
        } => (phase_number, day_in_phase),
        other => panic!("expected a regular day, got {other:?}"),
    };

    let descriptor = SpaceTimeBridge::with_defaults()
        .bridge(56.0)
        .expect("default tables");

    assert_eq!(calendar_phase, 3);
    assert_eq!(day_in_phase, 1);
    assert_eq!(descriptor.phase_number, 3);
    assert_eq!(descriptor.day_in_phase, 1);
    assert_eq!(descriptor.temporal_name, "Electric");
}

#[test]
fn full_chart_pass_over_one_epoch_day() {
    let mapper = CalendarMapper::with_defaults();
    let matcher = AspectMatcher::with_defaults();

    // The Day Out of Time is outside the grid regardless of the chart
    assert_eq!(
        mapper
            .map_date(NaiveDate::from_ymd_opt(2023, 11, 12).expect("valid date"))
            .expect("in range"),
        CalendarPosition::DayOutOfTime
    );

    // A tight grouping around 10 degrees plus an opposing body: one
    // cluster on the legacy grid, oppositions on the prime ring
    let chart = vec![
        BodyPosition::new("Sun", 8.0),
        BodyPosition::new("Mercury", 11.0),
        BodyPosition::new("Venus", 14.5),
        BodyPosition::new("Saturn", 190.0),
    ];

    let clusters = matcher.detect_clusters(&chart);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].members, vec!["Sun", "Mercury", "Venus"]);

    let aspects = matcher.all_aspects(&chart);
    assert!(aspects
        .iter()
        .any(|pair| pair.first == "Sun" && pair.second == "Saturn"
            && pair.aspect.name == "opposition"));
}
