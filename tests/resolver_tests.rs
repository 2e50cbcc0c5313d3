use callejero::{
    AddressRecord, Coordinate, FuzzyMatcher, PointResolver, ResolutionMethod, StreetIndex,
    StreetNameNormalizer, DEFAULT_FUZZY_MATCH_CONFIG,
};
use test_utils::{av_italia_reference_points, montevideo_reference_points, street_record};

fn build_fixture() -> (StreetIndex, StreetNameNormalizer) {
    let normalizer = StreetNameNormalizer::new().expect("embedded alias table should parse");
    let index = StreetIndex::build(&montevideo_reference_points(), &normalizer);
    (index, normalizer)
}

fn resolve(record: &AddressRecord) -> Option<(Coordinate, ResolutionMethod)> {
    let (index, normalizer) = build_fixture();
    let mut resolver = PointResolver::new(&index, &normalizer, DEFAULT_FUZZY_MATCH_CONFIG);
    resolver.resolve(record)
}

fn assert_close(actual: Coordinate, expected: Coordinate) {
    assert!(
        (actual.lat - expected.lat).abs() < 1e-9 && (actual.lng - expected.lng).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[cfg(test)]
mod index_tests {
    use super::*;
    use callejero::ReferencePoint;

    #[test]
    fn test_empty_input_builds_empty_index() {
        let normalizer = StreetNameNormalizer::new().expect("embedded alias table should parse");
        let index = StreetIndex::build(&[], &normalizer);
        assert!(index.is_empty());
    }

    #[test]
    fn test_points_without_coordinates_are_skipped() {
        let normalizer = StreetNameNormalizer::new().expect("embedded alias table should parse");
        let points = vec![ReferencePoint::new("AV ITALIA", Some(100), None)];
        let index = StreetIndex::build(&points, &normalizer);
        assert!(index.is_empty());
    }

    #[test]
    fn test_variants_are_registered() {
        let (index, _) = build_fixture();
        // "AV ITALIA" should be reachable under its variant spellings.
        for name in ["AV ITALIA", "ITALIA", "ITALIA AV"] {
            assert!(index.contains_street(name), "missing variant {:?}", name);
        }
    }

    #[test]
    fn test_first_writer_wins_for_duplicate_reference_points() {
        let normalizer = StreetNameNormalizer::new().expect("embedded alias table should parse");
        let points = vec![
            test_utils::reference_point("AV ITALIA", 100, -34.90, -56.16),
            test_utils::reference_point("AV ITALIA", 100, -1.0, -1.0),
        ];
        let index = StreetIndex::build(&points, &normalizer);
        let coordinate = index.exact_coordinate("AV ITALIA", 100).expect("exact entry");
        assert_close(coordinate, Coordinate::new(-34.90, -56.16));
    }

    #[test]
    fn test_numbered_points_are_sorted() {
        let normalizer = StreetNameNormalizer::new().expect("embedded alias table should parse");
        let points = vec![
            test_utils::reference_point("AV ITALIA", 300, -34.91, -56.17),
            test_utils::reference_point("AV ITALIA", 100, -34.90, -56.16),
        ];
        let index = StreetIndex::build(&points, &normalizer);
        let numbered = index.numbered_points("AV ITALIA").expect("numbered points");
        assert_eq!(numbered[0].0, 100);
        assert_eq!(numbered[1].0, 300);
    }
}

#[cfg(test)]
mod interpolation_tests {
    use super::*;
    use callejero::interpolate_position;

    #[test]
    fn test_duplicate_numbers_at_the_boundary_return_the_first_point() {
        // Two reference points sharing a house number must never divide by
        // zero; querying that number lands on the first of them.
        let points = vec![
            (100, Coordinate::new(-34.90, -56.16)),
            (100, Coordinate::new(-34.95, -56.20)),
        ];
        let coordinate = interpolate_position(100, &points).expect("should resolve");
        assert_close(coordinate, Coordinate::new(-34.90, -56.16));
    }

    #[test]
    fn test_duplicate_numbers_clamp_like_any_endpoint() {
        let points = vec![
            (100, Coordinate::new(-34.90, -56.16)),
            (100, Coordinate::new(-34.95, -56.20)),
        ];
        let coordinate = interpolate_position(150, &points).expect("should resolve");
        assert_close(coordinate, Coordinate::new(-34.95, -56.20));
    }

    #[test]
    fn test_interior_duplicate_numbers_resolve_to_the_first_of_them() {
        let points = vec![
            (100, Coordinate::new(-34.90, -56.16)),
            (200, Coordinate::new(-34.91, -56.17)),
            (200, Coordinate::new(-34.92, -56.18)),
            (300, Coordinate::new(-34.93, -56.19)),
        ];
        let coordinate = interpolate_position(200, &points).expect("should resolve");
        assert_close(coordinate, Coordinate::new(-34.91, -56.17));
    }

    #[test]
    fn test_interpolation_across_an_interior_duplicate() {
        // Brackets on either side of the duplicated number still interpolate
        // from their own pair.
        let points = vec![
            (100, Coordinate::new(-34.90, -56.16)),
            (200, Coordinate::new(-34.91, -56.17)),
            (200, Coordinate::new(-34.92, -56.18)),
            (300, Coordinate::new(-34.93, -56.19)),
        ];
        let coordinate = interpolate_position(150, &points).expect("should resolve");
        assert_close(coordinate, Coordinate::new(-34.905, -56.165));
        let coordinate = interpolate_position(250, &points).expect("should resolve");
        assert_close(coordinate, Coordinate::new(-34.925, -56.185));
    }
}

#[cfg(test)]
mod fuzzy_matcher_tests {
    use super::*;

    #[test]
    fn test_identical_significant_words_match_regardless_of_order() {
        let (index, normalizer) = build_fixture();
        let mut matcher = FuzzyMatcher::new(&index, DEFAULT_FUZZY_MATCH_CONFIG);

        // "LLUPES JOSE" normalizes as-is but is indexed as "JOSE LLUPES";
        // word order must not matter. (The variant index usually catches
        // this first; the matcher must agree.)
        let name = normalizer.normalize("Llupes José de");
        let matched = matcher.resolve_street_name(&name).expect("should match");
        assert_eq!(
            callejero::significant_words(&matched),
            vec!["JOSE".to_string(), "LLUPES".to_string()]
        );
    }

    #[test]
    fn test_zero_shared_words_never_match() {
        let (index, normalizer) = build_fixture();
        let mut matcher = FuzzyMatcher::new(&index, DEFAULT_FUZZY_MATCH_CONFIG);

        let name = normalizer.normalize("Inexistente Perdida");
        assert!(matcher.resolve_street_name(&name).is_none());
    }

    #[test]
    fn test_decisions_are_memoized() {
        let (index, normalizer) = build_fixture();
        let mut matcher = FuzzyMatcher::new(&index, DEFAULT_FUZZY_MATCH_CONFIG);

        let name = normalizer.normalize("Inexistente Perdida");
        assert!(matcher.resolve_street_name(&name).is_none());
        assert_eq!(matcher.cached_decision_count(), 1);
        assert!(matcher.resolve_street_name(&name).is_none());
        assert_eq!(matcher.cached_decision_count(), 1);
    }

    #[test]
    fn test_empty_name_never_matches() {
        let (index, _) = build_fixture();
        let mut matcher = FuzzyMatcher::new(&index, DEFAULT_FUZZY_MATCH_CONFIG);
        assert!(matcher
            .resolve_street_name(&callejero::NormalizedName::empty())
            .is_none());
        assert_eq!(matcher.cached_decision_count(), 0);
    }
}

#[cfg(test)]
mod point_resolver_tests {
    use super::*;

    #[test]
    fn test_exact_lookup_takes_precedence_over_interpolation() {
        let record = street_record("Avenida Italia").with_house_number(100);
        let (coordinate, method) = resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::Exact);
        assert_close(coordinate, Coordinate::new(-34.90, -56.16));
    }

    #[test]
    fn test_interpolates_between_known_numbers() {
        let record = street_record("Avenida Italia").with_house_number(200);
        let (coordinate, method) = resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::Interpolated);
        assert_close(coordinate, Coordinate::new(-34.905, -56.165));
    }

    #[test]
    fn test_abbreviated_spelling_resolves_identically() {
        let full = street_record("Avenida Italia").with_house_number(200);
        let abbreviated = street_record("Av Italia").with_house_number(200);
        assert_eq!(resolve(&full), resolve(&abbreviated));
    }

    #[test]
    fn test_inverted_spelling_resolves_identically() {
        let full = street_record("Avenida Italia").with_house_number(200);
        let inverted = street_record("Italia Avenida").with_house_number(200);
        assert_eq!(resolve(&full), resolve(&inverted));
    }

    #[test]
    fn test_numbers_outside_range_clamp_to_endpoints() {
        let below = street_record("Avenida Italia").with_house_number(50);
        let (coordinate, method) = resolve(&below).expect("should resolve");
        assert_eq!(method, ResolutionMethod::Interpolated);
        assert_close(coordinate, Coordinate::new(-34.90, -56.16));

        let above = street_record("Avenida Italia").with_house_number(400);
        let (coordinate, _) = resolve(&above).expect("should resolve");
        assert_close(coordinate, Coordinate::new(-34.91, -56.17));
    }

    #[test]
    fn test_cross_streets_estimate_an_intersection() {
        let record = street_record("Avenida Italia")
            .with_cross_streets(Some("Bulevar Artigas".to_string()), None);
        let (coordinate, method) = resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::Intersection);
        // BV GRAL ARTIGAS centroid is (-34.890, -56.175); the nearer of the
        // two AV ITALIA points is the one at number 100.
        assert_close(coordinate, Coordinate::new(-34.90, -56.16));
    }

    #[test]
    fn test_unmatched_cross_streets_fall_back_to_street_centroid() {
        let record = street_record("Avenida Italia")
            .with_cross_streets(Some("Inexistente Perdida".to_string()), None);
        let (coordinate, method) = resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::StreetCentroid);
        assert_close(coordinate, Coordinate::new(-34.905, -56.165));
    }

    #[test]
    fn test_no_number_no_cross_streets_uses_street_centroid() {
        let record = street_record("Avenida Italia");
        let (coordinate, method) = resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::StreetCentroid);
        assert_close(coordinate, Coordinate::new(-34.905, -56.165));
    }

    #[test]
    fn test_number_less_reference_points_still_give_a_centroid() {
        // CNO CARRASCO has one coordinate-bearing point and no usable
        // numbers, so a numbered query degrades to the centroid.
        let record = street_record("Camino Carrasco").with_house_number(4000);
        let (coordinate, method) = resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::StreetCentroid);
        assert_close(coordinate, Coordinate::new(-34.880, -56.130));
    }

    #[test]
    fn test_zero_house_number_is_treated_as_absent() {
        let record = street_record("Avenida Italia").with_house_number(0);
        let (_, method) = resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::StreetCentroid);
    }

    #[test]
    fn test_blank_street_resolves_to_nothing() {
        assert!(resolve(&AddressRecord::new(None)).is_none());
        assert!(resolve(&street_record("   ")).is_none());
    }

    #[test]
    fn test_unknown_street_resolves_to_nothing() {
        let record = street_record("Inexistente Perdida").with_house_number(123);
        assert!(resolve(&record).is_none());
    }

    #[test]
    fn test_two_point_interpolation_end_to_end() {
        let normalizer = StreetNameNormalizer::new().expect("embedded alias table should parse");
        let index = StreetIndex::build(&av_italia_reference_points(), &normalizer);
        let mut resolver = PointResolver::new(&index, &normalizer, DEFAULT_FUZZY_MATCH_CONFIG);

        let record = street_record("Avenida Italia").with_house_number(200);
        let (coordinate, method) = resolver.resolve(&record).expect("should resolve");
        assert_eq!(method, ResolutionMethod::Interpolated);
        assert_close(coordinate, Coordinate::new(-34.905, -56.165));
    }
}
