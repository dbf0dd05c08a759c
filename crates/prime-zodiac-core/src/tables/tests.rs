//! Tests for the static table types.

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::constants::{PHASE_SPAN, PRIME_RING};
    use crate::error::CoreError;
    use crate::tables::*;

    #[test]
    fn test_default_sign_table_is_valid() {
        let signs = SignTable::default();
        assert!(signs.validate().is_ok());
        assert_eq!(signs.entries.len(), 13);
        assert_eq!(signs.entries[0].name, "Ares Prime");
        assert_eq!(signs.entries[8].name, "Ophiuchus Prime");
        assert_eq!(signs.entries[8].element, Element::Aether);
        assert_eq!(signs.entries[12].name, "Pisces Prime");
    }

    #[test]
    fn test_default_moon_table_is_valid() {
        let moons = MoonTable::default();
        assert!(moons.validate().is_ok());
        assert_eq!(moons.entries[0].name, "Magnetic");
        assert_eq!(moons.entries[0].signature, "Unify");
        assert_eq!(moons.entries[12].tone, 13);
    }

    #[test]
    fn test_arcs_partition_the_ring() {
        let signs = SignTable::default();

        // Contiguous, no gaps or overlaps, full cover
        let mut cursor = 0.0;
        for record in &signs.entries {
            assert_eq!(record.arc.start, cursor);
            assert_eq!(record.arc.width(), PHASE_SPAN);
            cursor = record.arc.end;
        }
        assert_eq!(cursor, PRIME_RING);
    }

    #[test]
    fn test_truncated_table_is_rejected() {
        let mut signs = SignTable::default();
        signs.entries.pop();

        match signs.validate() {
            Err(CoreError::WrongEntryCount { expected, actual }) => {
                assert_eq!(expected, 13);
                assert_eq!(actual, 12);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_gapped_arc_is_rejected() {
        let mut moons = MoonTable::default();
        moons.entries[4].arc.start += 1.0;

        assert!(matches!(
            moons.validate(),
            Err(CoreError::ArcMismatch { index: 4, .. })
        ));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut signs = SignTable::default();
        signs.entries[2].name.clear();

        assert!(matches!(
            signs.validate(),
            Err(CoreError::EmptyName { index: 2 })
        ));
    }

    #[test]
    fn test_default_catalog_priority_order() {
        let catalog = AspectCatalog::default();
        assert!(catalog.validate().is_ok());

        let names: Vec<&str> = catalog.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "conjunction",
                "opposition",
                "trine",
                "square",
                "sextile",
                "quintile",
                "septile",
                "novile",
                "resonance",
                "quincunx",
            ]
        );
    }

    #[test]
    fn test_opposition_phase_count_rounds_to_even() {
        // 182 / 28 = 6.5 exactly; ties-to-even keeps it at 6 phases
        let opposition = &AspectCatalog::default().entries[1];
        assert_eq!(opposition.angle, 182.0);
        assert_eq!(opposition.phase_count, 6);
        assert_eq!(opposition.resonance, Resonance::Completion);
    }

    #[test]
    fn test_resonance_aspect_spans_one_phase() {
        let resonance = &AspectCatalog::default().entries[8];
        assert_eq!(resonance.angle, 28.0);
        assert_eq!(resonance.phase_count, 1);
        assert_eq!(resonance.resonance, Resonance::Initiation);
    }

    #[test]
    fn test_catalog_rejects_out_of_range_angle() {
        let mut catalog = AspectCatalog::default();
        catalog.entries.push(AspectDef::new("rogue", 200.0, 1.0));
        assert!(matches!(
            catalog.validate(),
            Err(CoreError::InvalidAspect { .. })
        ));
    }

    #[test]
    fn test_catalog_rejects_negative_orb() {
        let mut catalog = AspectCatalog::default();
        catalog.entries[0].orb = -1.0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_weekday_cycle() {
        let cycle = WeekdayCycle::default();
        assert!(cycle.validate().is_ok());
        assert_eq!(cycle.name(0), Some("Dali"));
        assert_eq!(cycle.name(6), Some("Silio"));
        assert_eq!(cycle.name(7), None);

        let short = WeekdayCycle {
            names: vec!["Dali".to_string()],
        };
        assert!(matches!(
            short.validate(),
            Err(CoreError::WrongWeekdayCount { actual: 1, .. })
        ));
    }

    #[test]
    fn test_tables_serde_round_trip() {
        let signs = SignTable::default();
        let json = serde_json::to_string(&signs).expect("serialize");
        let back: SignTable = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(signs, back);

        let catalog = AspectCatalog::default();
        let json = serde_json::to_string(&catalog).expect("serialize");
        let back: AspectCatalog = serde_json::from_str(&json).expect("deserialize");

        // The catalog carries non-terminating angles (trine is 364/3);
        // these must survive the text round trip bit-exactly
        assert_eq!(back.entries[2].angle, catalog.entries[2].angle);
        assert_eq!(catalog, back);
    }
}
