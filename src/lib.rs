mod constants;
pub mod models;
pub use constants::DEFAULT_FUZZY_MATCH_CONFIG;
pub use models::{
    AddressRecord, Error, FallbackCascade, FuzzyMatchConfig, FuzzyMatcher, MatchCache,
    NormalizedName, PointResolver, ReferencePoint, ResolutionMethod, ResolutionStats, StreetIndex,
    StreetNameNormalizer,
};
pub mod types;
mod utils;
pub use types::{Coordinate, HouseNumber, ZoneId};
pub use utils::{
    generate_street_variants, interpolate_position, jaccard_similarity_words, mean_coordinate,
    significant_words,
};

/// Resolve every record in `records` against `reference_points` with the
/// default matching configuration, filling in `coordinate` and `method`
/// wherever any strategy succeeds. Records no strategy can place are left
/// untouched; the returned stats say how many and on which streets.
pub fn resolve_addresses(
    records: &mut [AddressRecord],
    reference_points: &[ReferencePoint],
) -> Result<ResolutionStats, Error> {
    resolve_addresses_with_custom_config(records, reference_points, DEFAULT_FUZZY_MATCH_CONFIG)
}

/// Same as [`resolve_addresses`], with caller-provided matching parameters.
pub fn resolve_addresses_with_custom_config(
    records: &mut [AddressRecord],
    reference_points: &[ReferencePoint],
    fuzzy_match_config: FuzzyMatchConfig,
) -> Result<ResolutionStats, Error> {
    let normalizer = StreetNameNormalizer::new()?;
    let index = StreetIndex::build(reference_points, &normalizer);

    let cascade = FallbackCascade::new(&index, &normalizer, fuzzy_match_config);
    Ok(cascade.run(records))
}
