use crate::models::{
    AddressRecord, FuzzyMatchConfig, FuzzyMatcher, NormalizedName, ResolutionMethod, StreetIndex,
    StreetNameNormalizer,
};
use crate::types::{Coordinate, IndexedStreetName};
use crate::utils::{generate_street_variants, interpolate_position, mean_coordinate};
use std::cmp::Ordering;

/// Resolves a single `AddressRecord` to a coordinate, trying strategies from
/// most to least precise: exact door-number lookup, interpolation along the
/// street, cross-street intersection estimation, street centroid.
pub struct PointResolver<'a> {
    index: &'a StreetIndex,
    normalizer: &'a StreetNameNormalizer,
    matcher: FuzzyMatcher<'a>,
}

impl<'a> PointResolver<'a> {
    pub fn new(
        index: &'a StreetIndex,
        normalizer: &'a StreetNameNormalizer,
        config: FuzzyMatchConfig,
    ) -> Self {
        PointResolver {
            index,
            normalizer,
            matcher: FuzzyMatcher::new(index, config),
        }
    }

    /// Resolve one record, or return `None` when no strategy applies.
    /// Missing or malformed fields are "insufficient information", never an
    /// error; the caller decides what unresolved means.
    pub fn resolve(&mut self, record: &AddressRecord) -> Option<(Coordinate, ResolutionMethod)> {
        let normalized = self.normalizer.normalize_opt(record.street.as_deref());
        if normalized.is_empty() {
            return None;
        }

        let variants = generate_street_variants(normalized.as_str());
        let matched = self.match_street(&normalized, &variants)?;

        if let Some(number) = record.effective_house_number() {
            // Exact lookup takes precedence over interpolation, through any
            // registered variant spelling.
            for variant in &variants {
                if let Some(coordinate) = self.index.exact_coordinate(variant, number) {
                    return Some((coordinate, ResolutionMethod::Exact));
                }
            }

            if let Some(points) = self.index.numbered_points(&matched) {
                if points.len() >= 2 {
                    if let Some(coordinate) = interpolate_position(number, points) {
                        return Some((coordinate, ResolutionMethod::Interpolated));
                    }
                }
            }
        }

        if record.cross_street_1.is_some() || record.cross_street_2.is_some() {
            if let Some(coordinate) = self.estimate_intersection(&matched, record) {
                return Some((coordinate, ResolutionMethod::Intersection));
            }
        }

        if let Some(points) = self.index.points(&matched) {
            if let Some(coordinate) = mean_coordinate(points) {
                return Some((coordinate, ResolutionMethod::StreetCentroid));
            }
        }

        None
    }

    /// Find the indexed street for a normalized name: first exact presence
    /// of any variant, then fuzzy matching on the base name.
    fn match_street(
        &mut self,
        normalized: &NormalizedName,
        variants: &[String],
    ) -> Option<IndexedStreetName> {
        for variant in variants {
            if self.index.contains_street(variant) {
                return Some(variant.clone());
            }
        }

        self.matcher.resolve_street_name(normalized)
    }

    /// Estimate where the main street meets its cross streets: centroid of
    /// each matched cross street, centroid of those centroids as a reference
    /// position, then the main-street point nearest to it.
    ///
    /// Nearest means squared Euclidean in coordinate space; at city scale
    /// the geodesic error is negligible for picking a point.
    fn estimate_intersection(
        &mut self,
        matched_street: &str,
        record: &AddressRecord,
    ) -> Option<Coordinate> {
        let index = self.index;
        let main_points = index.points(matched_street)?;

        let mut cross_centroids = Vec::new();
        for cross_street in [
            record.cross_street_1.as_deref(),
            record.cross_street_2.as_deref(),
        ] {
            let normalized = self.normalizer.normalize_opt(cross_street);
            if normalized.is_empty() {
                continue;
            }

            let variants = generate_street_variants(normalized.as_str());
            let matched = match self.match_street(&normalized, &variants) {
                Some(matched) => matched,
                None => continue,
            };

            if let Some(centroid) = index.points(&matched).and_then(mean_coordinate) {
                cross_centroids.push(centroid);
            }
        }

        let reference = mean_coordinate(&cross_centroids)?;

        main_points
            .iter()
            .min_by(|a, b| {
                a.squared_distance_to(&reference)
                    .partial_cmp(&b.squared_distance_to(&reference))
                    .unwrap_or(Ordering::Equal)
            })
            .copied()
    }

    /// Number of memoized fuzzy decisions made so far in this run.
    pub fn cached_decision_count(&self) -> usize {
        self.matcher.cached_decision_count()
    }
}
