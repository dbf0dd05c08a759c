//! Tests for aspect matching and cluster detection.

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use prime_zodiac_core::{AspectCatalog, AspectDef, Resonance};

    use crate::aspect::*;
    use crate::config::AspectConfig;

    fn matcher() -> AspectMatcher {
        AspectMatcher::with_defaults()
    }

    #[test]
    fn test_minimal_separation_folds_to_shorter_arc() {
        // 0 and 359 tropical are 1.011 prime degrees apart the short way
        let sep = minimal_separation(0.0, 359.0);
        assert!((sep - 1.011111).abs() < 1e-4);
        assert!(sep <= 182.0);
    }

    #[test]
    fn test_minimal_separation_is_symmetric() {
        for (a, b) in [(0.0, 180.0), (350.0, 10.0), (-45.0, 270.0), (0.0, 0.0)] {
            assert_eq!(minimal_separation(a, b), minimal_separation(b, a));
        }
    }

    #[test]
    fn test_exact_opposition_scenario() {
        // 0 and 180 tropical sit exactly 182 prime degrees apart
        let sep = minimal_separation(0.0, 180.0);
        assert_eq!(sep, 182.0);

        let matched = matcher().classify(sep).expect("opposition");
        assert_eq!(matched.name, "opposition");
        assert_eq!(matched.phase_count, 6);
        assert_eq!(matched.resonance, Resonance::Completion);
        assert_eq!(matched.resonance.label(), "Completion");
        assert_eq!(matched.deviation, 0.0);
    }

    #[test]
    fn test_classify_symmetry_through_full_pipeline() {
        for (a, b) in [(10.0, 130.0), (300.0, 5.0), (45.0, 46.0)] {
            let forward = matcher().classify(minimal_separation(a, b));
            let backward = matcher().classify(minimal_separation(b, a));
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn test_no_aspect_is_none_not_error() {
        // 100 prime degrees sits between sextile+orb and trine-orb
        assert!(matcher().classify(100.0).is_none());
    }

    #[test]
    fn test_catalog_order_breaks_ties() {
        // Two entries whose orb windows both cover 2.0; the first declared
        // entry must win
        let catalog = AspectCatalog {
            entries: vec![
                AspectDef::new("first", 0.0, 5.0),
                AspectDef::new("second", 4.0, 5.0),
            ],
        };
        let matcher = AspectMatcher::new(catalog, AspectConfig::default()).expect("valid");

        let matched = matcher.classify(2.0).expect("within both orbs");
        assert_eq!(matched.name, "first");
    }

    #[test]
    fn test_resonance_aspect_at_one_phase() {
        // Exactly one phase apart: the 28-degree resonance aspect
        let matched = matcher().classify(28.0).expect("resonance");
        assert_eq!(matched.name, "resonance");
        assert_eq!(matched.phase_count, 1);
        assert_eq!(matched.resonance, Resonance::Initiation);
    }

    #[test]
    fn test_all_aspects_pair_ordering() {
        let positions = vec![
            BodyPosition::new("Sun", 0.0),
            BodyPosition::new("Moon", 180.0),
            BodyPosition::new("Mars", 90.5),
        ];

        let matches = matcher().all_aspects(&positions);

        // Sun-Moon opposition, Sun-Mars square, Moon-Mars square; input
        // iteration order, first index then second
        assert_eq!(matches.len(), 3);
        assert_eq!(
            (matches[0].first.as_str(), matches[0].second.as_str()),
            ("Sun", "Moon")
        );
        assert_eq!(matches[0].aspect.name, "opposition");
        assert_eq!(
            (matches[1].first.as_str(), matches[1].second.as_str()),
            ("Sun", "Mars")
        );
        assert_eq!(matches[1].aspect.name, "square");
        assert_eq!(
            (matches[2].first.as_str(), matches[2].second.as_str()),
            ("Moon", "Mars")
        );
        assert_eq!(matches[2].aspect.name, "square");
    }

    #[test]
    fn test_all_aspects_skips_unmatched_pairs() {
        let positions = vec![
            BodyPosition::new("Sun", 0.0),
            // ~100 prime degrees away: matches nothing in the catalog
            BodyPosition::new("Ceres", 98.9),
        ];
        assert!(matcher().all_aspects(&positions).is_empty());
    }

    #[test]
    fn test_detect_clusters_on_legacy_grid() {
        let positions = vec![
            BodyPosition::new("Sun", 5.0),
            BodyPosition::new("Mercury", 12.0),
            BodyPosition::new("Venus", 25.0),
            BodyPosition::new("Mars", 200.0),
        ];

        let clusters = matcher().detect_clusters(&positions);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].window_start, 0.0);
        assert_eq!(clusters[0].window_width, 30.0);
        assert_eq!(clusters[0].members, vec!["Sun", "Mercury", "Venus"]);
    }

    #[test]
    fn test_detect_clusters_below_threshold() {
        let positions = vec![
            BodyPosition::new("Sun", 5.0),
            BodyPosition::new("Mercury", 12.0),
        ];
        assert!(matcher().detect_clusters(&positions).is_empty());
    }

    #[test]
    fn test_detect_clusters_normalizes_input() {
        // 365 and -355 both normalize into the [0, 30) window
        let positions = vec![
            BodyPosition::new("A", 365.0),
            BodyPosition::new("B", -355.0),
            BodyPosition::new("C", 15.0),
        ];
        let clusters = matcher().detect_clusters(&positions);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members.len(), 3);
    }
}
