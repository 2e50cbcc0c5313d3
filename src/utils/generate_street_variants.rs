use crate::constants::{HONORIFIC_SHORT_FORMS, ROAD_TYPE_SHORT_FORMS};

/// Generate the set of spellings considered equivalent to a normalized street
/// name. The reference data and the input records disagree on word order and
/// on whether road-type words and honorifics are included, so both indexing
/// and lookup try every plausible arrangement.
///
/// The returned list always starts with the input itself and contains no
/// duplicates; order is deterministic so lookups that scan it behave the same
/// on every run.
pub fn generate_street_variants(name: &str) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }

    let mut variants: Vec<String> = vec![name.to_string()];
    let add = |variants: &mut Vec<String>, candidate: String| {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    };

    // Road-type word at either end: drop it, and also try it on the other end.
    for road_type in ROAD_TYPE_SHORT_FORMS {
        if let Some(base) = name.strip_prefix(&format!("{} ", road_type)) {
            add(&mut variants, base.to_string());
            add(&mut variants, format!("{} {}", base, road_type));
        }
        if let Some(base) = name.strip_suffix(&format!(" {}", road_type)) {
            add(&mut variants, base.to_string());
            add(&mut variants, format!("{} {}", road_type, base));
        }
    }

    // Honorifics are often dropped entirely in one of the two datasets.
    for honorific in HONORIFIC_SHORT_FORMS {
        let interior = format!(" {} ", honorific);
        if name.contains(&interior) {
            add(&mut variants, name.replace(&interior, " "));
        }
        if let Some(base) = name.strip_prefix(&format!("{} ", honorific)) {
            add(&mut variants, base.to_string());
        }
    }

    // Word-order rearrangements for short names ("LLUPES JOSE" vs "JOSE LLUPES").
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() == 2 {
        add(&mut variants, format!("{} {}", words[1], words[0]));
    } else if words.len() == 3 {
        add(&mut variants, format!("{} {} {}", words[1], words[2], words[0]));
        add(&mut variants, format!("{} {} {}", words[2], words[0], words[1]));
        add(&mut variants, format!("{} {} {}", words[0], words[2], words[1]));
    }

    variants
}
