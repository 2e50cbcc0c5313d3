use crate::models::{NormalizedName, StreetIndex};
use crate::types::IndexedStreetName;
use crate::utils::{jaccard_similarity_words, significant_words};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Tuning knobs for fuzzy street matching.
///
/// Both values were chosen empirically against the original reference
/// dataset; they are parameters rather than constants so they can be
/// calibrated against a labeled validation set later.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatchConfig {
    /// Minimum similarity score for a candidate to be accepted.
    pub similarity_threshold: f32,
    /// Added when input and candidate have the same significant-word count,
    /// to break ties in favor of structurally similar names.
    pub token_count_bonus: f32,
}

/// Per-run memo of fuzzy match decisions, including negative ones, so
/// repeated addresses on the same unmatched street pay the candidate scan
/// once. Insert-once: the first decision for a key sticks.
pub struct MatchCache {
    decisions: HashMap<IndexedStreetName, Option<IndexedStreetName>>,
}

impl MatchCache {
    pub fn new() -> Self {
        MatchCache {
            decisions: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Option<IndexedStreetName>> {
        self.decisions.get(name)
    }

    /// Record a decision for `name` unless one already exists.
    pub fn insert_once(&mut self, name: String, decision: Option<IndexedStreetName>) {
        self.decisions.entry(name).or_insert(decision);
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves normalized names with no exact index entry to the closest known
/// street name, if any candidate scores at or above the threshold.
pub struct FuzzyMatcher<'a> {
    index: &'a StreetIndex,
    config: FuzzyMatchConfig,
    cache: MatchCache,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(index: &'a StreetIndex, config: FuzzyMatchConfig) -> Self {
        FuzzyMatcher {
            index,
            config,
            cache: MatchCache::new(),
        }
    }

    /// Resolve a normalized name to a known street name, consulting the
    /// cache first. Returns `None` when no candidate is acceptable; that
    /// decision is cached too.
    pub fn resolve_street_name(&mut self, name: &NormalizedName) -> Option<IndexedStreetName> {
        if name.is_empty() {
            return None;
        }

        if let Some(decision) = self.cache.get(name.as_str()) {
            return decision.clone();
        }

        let decision = if self.index.contains_street(name.as_str()) {
            Some(name.as_str().to_string())
        } else {
            match self.best_match(name) {
                Some((candidate, score)) if score >= self.config.similarity_threshold => {
                    debug!(
                        "fuzzy match: '{}' -> '{}' (score {:.3})",
                        name, candidate, score
                    );
                    Some(candidate)
                }
                _ => None,
            }
        };

        self.cache.insert_once(name.as_str().to_string(), decision.clone());
        decision
    }

    /// Score every candidate sharing at least one significant word with the
    /// input and return the best, if any.
    fn best_match(&self, name: &NormalizedName) -> Option<(IndexedStreetName, f32)> {
        let words = significant_words(name.as_str());
        if words.is_empty() {
            return None;
        }

        // BTreeMap keeps candidate iteration deterministic so score ties
        // always break the same way.
        let mut candidates: BTreeMap<&str, &[String]> = BTreeMap::new();
        for word in &words {
            if let Some(entries) = self.index.word_candidates(word) {
                for (candidate, candidate_words) in entries {
                    candidates.insert(candidate.as_str(), candidate_words.as_slice());
                }
            }
        }

        let mut best_match: Option<(IndexedStreetName, f32)> = None;
        for (candidate, candidate_words) in candidates {
            let mut score = jaccard_similarity_words(&words, candidate_words);
            if words.len() == candidate_words.len() {
                score += self.config.token_count_bonus;
            }

            if best_match
                .as_ref()
                .map_or(true, |(_, best_score)| score > *best_score)
            {
                best_match = Some((candidate.to_string(), score));
            }
        }

        best_match
    }

    /// Number of memoized decisions made so far in this run.
    pub fn cached_decision_count(&self) -> usize {
        self.cache.len()
    }
}
