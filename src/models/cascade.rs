use crate::constants::TOP_UNRESOLVED_REPORT_SIZE;
use crate::models::{
    AddressRecord, FuzzyMatchConfig, PointResolver, ResolutionMethod, StreetIndex,
    StreetNameNormalizer,
};
use crate::types::{Coordinate, ZoneId};
use log::info;
use std::collections::{BTreeMap, HashMap};

/// Per-strategy resolution counts for one cascade run, accumulated
/// monotonically, plus the diagnostic tail: how many records stayed
/// unresolved and which street names they cluster on.
#[derive(Debug, Clone, Default)]
pub struct ResolutionStats {
    resolved_counts: BTreeMap<ResolutionMethod, usize>,
    unresolved_count: usize,
    top_unresolved_streets: Vec<(String, usize)>,
}

impl ResolutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, method: ResolutionMethod) {
        *self.resolved_counts.entry(method).or_insert(0) += 1;
    }

    pub fn count(&self, method: ResolutionMethod) -> usize {
        self.resolved_counts.get(&method).copied().unwrap_or(0)
    }

    pub fn total_resolved(&self) -> usize {
        self.resolved_counts.values().sum()
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved_count
    }

    /// Per-method counts in precedence order, zero counts included.
    pub fn method_counts(&self) -> impl Iterator<Item = (ResolutionMethod, usize)> + '_ {
        ResolutionMethod::ALL
            .iter()
            .map(|method| (*method, self.count(*method)))
    }

    /// The most frequent unresolved street names, descending by count.
    pub fn top_unresolved_streets(&self) -> &[(String, usize)] {
        &self.top_unresolved_streets
    }

    /// Fill the unresolved tally and the top unresolved street names from
    /// the final record states.
    pub(crate) fn finalize(&mut self, records: &[AddressRecord]) {
        let mut street_counts: HashMap<&str, usize> = HashMap::new();
        self.unresolved_count = 0;

        for record in records.iter().filter(|record| !record.is_resolved()) {
            self.unresolved_count += 1;
            let street = record.street.as_deref().unwrap_or("");
            *street_counts.entry(street).or_insert(0) += 1;
        }

        let mut counts: Vec<(String, usize)> = street_counts
            .into_iter()
            .map(|(street, count)| (street.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(TOP_UNRESOLVED_REPORT_SIZE);
        self.top_unresolved_streets = counts;
    }
}

/// Mean accumulator for the grouping passes.
#[derive(Default)]
struct CoordinateSum {
    lat: f64,
    lng: f64,
    count: usize,
}

impl CoordinateSum {
    fn push(&mut self, coordinate: Coordinate) {
        self.lat += coordinate.lat;
        self.lng += coordinate.lng;
        self.count += 1;
    }

    fn mean(&self) -> Option<Coordinate> {
        if self.count == 0 {
            return None;
        }
        Some(Coordinate::new(
            self.lat / self.count as f64,
            self.lng / self.count as f64,
        ))
    }
}

/// Applies resolution strategies in strict priority order across successive
/// passes over the still-unresolved records:
///
/// 1. direct resolution through the `PointResolver`,
/// 2. block-neighbor averaging over the verbatim
///    `(street, cross street 1, cross street 2)` triple,
/// 3. zone+street averaging,
/// 4. zone centroid.
///
/// Each pass only touches records unresolved at its start and each pass's
/// results are visible to the next, so re-running the whole cascade on its
/// own output resolves nothing new. Records left unresolved after pass 4
/// stay that way; that is a reportable outcome, not an error.
pub struct FallbackCascade<'a> {
    resolver: PointResolver<'a>,
}

impl<'a> FallbackCascade<'a> {
    pub fn new(
        index: &'a StreetIndex,
        normalizer: &'a StreetNameNormalizer,
        config: FuzzyMatchConfig,
    ) -> Self {
        FallbackCascade {
            resolver: PointResolver::new(index, normalizer, config),
        }
    }

    /// Run all four passes and return the accumulated stats.
    pub fn run(mut self, records: &mut [AddressRecord]) -> ResolutionStats {
        let mut stats = ResolutionStats::new();

        self.run_direct_pass(records, &mut stats);
        Self::run_block_neighbor_pass(records, &mut stats);
        Self::run_zone_street_pass(records, &mut stats);
        Self::run_zone_centroid_pass(records, &mut stats);

        stats.finalize(records);
        info!(
            "cascade finished: {} resolved, {} unresolved",
            stats.total_resolved(),
            stats.unresolved_count()
        );

        stats
    }

    /// Pass 1: point resolution per record (exact, interpolated,
    /// intersection or street centroid).
    fn run_direct_pass(&mut self, records: &mut [AddressRecord], stats: &mut ResolutionStats) {
        let mut resolved = 0;
        for record in records.iter_mut().filter(|record| !record.is_resolved()) {
            if let Some((coordinate, method)) = self.resolver.resolve(record) {
                record.assign(coordinate, method);
                stats.record(method);
                resolved += 1;
            }
        }
        info!(
            "direct pass resolved {} records ({} fuzzy decisions cached)",
            resolved,
            self.resolver.cached_decision_count()
        );
    }

    /// Pass 2: records on the same block (same verbatim street and cross
    /// streets) as already-resolved records get the block's mean coordinate.
    fn run_block_neighbor_pass(records: &mut [AddressRecord], stats: &mut ResolutionStats) {
        let block_key = |record: &AddressRecord| {
            (
                record.street.clone().unwrap_or_default(),
                record.cross_street_1.clone().unwrap_or_default(),
                record.cross_street_2.clone().unwrap_or_default(),
            )
        };

        let mut groups: HashMap<(String, String, String), CoordinateSum> = HashMap::new();
        for record in records.iter().filter(|record| record.is_resolved()) {
            if let Some(coordinate) = record.coordinate {
                groups.entry(block_key(record)).or_default().push(coordinate);
            }
        }

        let mut resolved = 0;
        for record in records.iter_mut().filter(|record| !record.is_resolved()) {
            if let Some(mean) = groups.get(&block_key(record)).and_then(CoordinateSum::mean) {
                record.assign(mean, ResolutionMethod::BlockNeighbor);
                stats.record(ResolutionMethod::BlockNeighbor);
                resolved += 1;
            }
        }
        info!("block-neighbor pass resolved {} records", resolved);
    }

    /// Pass 3: mean coordinate of resolved records on the same verbatim
    /// street within the same zone.
    fn run_zone_street_pass(records: &mut [AddressRecord], stats: &mut ResolutionStats) {
        let zone_street_key = |record: &AddressRecord| {
            (record.zone, record.street.clone().unwrap_or_default())
        };

        let mut groups: HashMap<(Option<ZoneId>, String), CoordinateSum> = HashMap::new();
        for record in records.iter().filter(|record| record.is_resolved()) {
            if let Some(coordinate) = record.coordinate {
                groups
                    .entry(zone_street_key(record))
                    .or_default()
                    .push(coordinate);
            }
        }

        let mut resolved = 0;
        for record in records.iter_mut().filter(|record| !record.is_resolved()) {
            if let Some(mean) = groups
                .get(&zone_street_key(record))
                .and_then(CoordinateSum::mean)
            {
                record.assign(mean, ResolutionMethod::ZoneStreet);
                stats.record(ResolutionMethod::ZoneStreet);
                resolved += 1;
            }
        }
        info!("zone-street pass resolved {} records", resolved);
    }

    /// Pass 4: last resort, the zone's mean coordinate for records whose
    /// zone is known and has resolved members.
    fn run_zone_centroid_pass(records: &mut [AddressRecord], stats: &mut ResolutionStats) {
        let mut groups: HashMap<ZoneId, CoordinateSum> = HashMap::new();
        for record in records.iter().filter(|record| record.is_resolved()) {
            if let (Some(zone), Some(coordinate)) = (record.zone, record.coordinate) {
                groups.entry(zone).or_default().push(coordinate);
            }
        }

        let mut resolved = 0;
        for record in records.iter_mut().filter(|record| !record.is_resolved()) {
            let mean = record
                .zone
                .and_then(|zone| groups.get(&zone))
                .and_then(CoordinateSum::mean);
            if let Some(mean) = mean {
                record.assign(mean, ResolutionMethod::ZoneCentroid);
                stats.record(ResolutionMethod::ZoneCentroid);
                resolved += 1;
            }
        }
        info!("zone-centroid pass resolved {} records", resolved);
    }
}
