use std::collections::HashSet;

/// Compute the Jaccard similarity between two word lists by treating them as sets.
///
/// Identical sets short-circuit to a perfect score so that word order and
/// duplicates never dilute an exact significant-word match.
pub fn jaccard_similarity_words(words1: &[String], words2: &[String]) -> f32 {
    if words1.is_empty() || words2.is_empty() {
        return 0.0;
    }

    let set1: HashSet<&str> = words1.iter().map(String::as_str).collect();
    let set2: HashSet<&str> = words2.iter().map(String::as_str).collect();

    if set1 == set2 {
        return 1.0;
    }

    let intersection_size = set1.intersection(&set2).count();
    let union_size = set1.union(&set2).count();

    intersection_size as f32 / union_size as f32
}
