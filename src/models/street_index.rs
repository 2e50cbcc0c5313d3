use crate::models::StreetNameNormalizer;
use crate::types::{Coordinate, HouseNumber, IndexedStreetName, SignificantWords};
use crate::utils::{generate_street_variants, significant_words};
use log::info;
use std::collections::{HashMap, HashSet};

/// One known address point from the reference dataset (e.g. a door-number
/// survey). Points without a coordinate are skipped at indexing; points
/// without a positive house number still contribute to centroid and
/// intersection estimation but not to exact lookup or interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePoint {
    pub street: String,
    pub house_number: Option<HouseNumber>,
    pub coordinate: Option<Coordinate>,
}

impl ReferencePoint {
    pub fn new(
        street: &str,
        house_number: Option<HouseNumber>,
        coordinate: Option<Coordinate>,
    ) -> Self {
        ReferencePoint {
            street: street.to_string(),
            house_number,
            coordinate,
        }
    }
}

/// Read-only lookup structures built once from the full reference point set.
///
/// Every reference street name is registered under all of its generated
/// variants, so lookups by any plausible spelling land on the same points:
///
/// - `exact`: `(variant name, house number)` to coordinate, first writer wins.
/// - `numbered_points`: per-name `(number, coordinate)` lists sorted
///   ascending by number, for interpolation.
/// - `all_points`: per-name coordinates of every valid point, numbered or
///   not, for centroid and intersection estimation.
/// - `word_index`: significant word to candidate names, used only to prune
///   candidates during fuzzy matching.
pub struct StreetIndex {
    exact: HashMap<(IndexedStreetName, HouseNumber), Coordinate>,
    numbered_points: HashMap<IndexedStreetName, Vec<(HouseNumber, Coordinate)>>,
    all_points: HashMap<IndexedStreetName, Vec<Coordinate>>,
    word_index: HashMap<String, Vec<(IndexedStreetName, SignificantWords)>>,
}

impl StreetIndex {
    /// Build the index in one order-independent batch pass. Empty input
    /// yields an empty index; there is no other failure mode.
    pub fn build(points: &[ReferencePoint], normalizer: &StreetNameNormalizer) -> Self {
        let mut index = StreetIndex {
            exact: HashMap::new(),
            numbered_points: HashMap::new(),
            all_points: HashMap::new(),
            word_index: HashMap::new(),
        };
        let mut word_indexed_names: HashSet<IndexedStreetName> = HashSet::new();

        for point in points {
            let coordinate = match point.coordinate {
                Some(coordinate) => coordinate,
                None => continue,
            };

            let normalized = normalizer.normalize(&point.street);
            if normalized.is_empty() {
                continue;
            }

            let variants = generate_street_variants(normalized.as_str());

            for variant in &variants {
                if word_indexed_names.insert(variant.clone()) {
                    let words = significant_words(variant);
                    for word in &words {
                        index
                            .word_index
                            .entry(word.clone())
                            .or_default()
                            .push((variant.clone(), words.clone()));
                    }
                }

                index
                    .all_points
                    .entry(variant.clone())
                    .or_default()
                    .push(coordinate);
            }

            if let Some(number) = point.house_number.filter(|number| *number > 0) {
                for variant in &variants {
                    index
                        .exact
                        .entry((variant.clone(), number))
                        .or_insert(coordinate);
                    index
                        .numbered_points
                        .entry(variant.clone())
                        .or_default()
                        .push((number, coordinate));
                }
            }
        }

        for points in index.numbered_points.values_mut() {
            points.sort_by_key(|(number, _)| *number);
        }

        info!(
            "street index built: {} names, {} exact entries, {} indexed words",
            index.all_points.len(),
            index.exact.len(),
            index.word_index.len()
        );

        index
    }

    /// Exact coordinate for a `(name, house number)` pair, if registered.
    pub fn exact_coordinate(&self, name: &str, number: HouseNumber) -> Option<Coordinate> {
        self.exact.get(&(name.to_string(), number)).copied()
    }

    /// The street's numbered points, sorted ascending by house number.
    pub fn numbered_points(&self, name: &str) -> Option<&[(HouseNumber, Coordinate)]> {
        self.numbered_points.get(name).map(Vec::as_slice)
    }

    /// All of the street's known coordinates, numbered or not.
    pub fn points(&self, name: &str) -> Option<&[Coordinate]> {
        self.all_points.get(name).map(Vec::as_slice)
    }

    /// Whether a name (in any registered variant form) is a known street.
    pub fn contains_street(&self, name: &str) -> bool {
        self.all_points.contains_key(name)
    }

    /// Candidate streets sharing a significant word, with their word lists.
    pub fn word_candidates(&self, word: &str) -> Option<&[(IndexedStreetName, SignificantWords)]> {
        self.word_index.get(word).map(Vec::as_slice)
    }

    /// Number of distinct registered names, variants included.
    pub fn street_count(&self) -> usize {
        self.all_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_points.is_empty()
    }
}
