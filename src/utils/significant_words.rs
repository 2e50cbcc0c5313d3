use crate::constants::NON_SIGNIFICANT_WORDS;
use crate::types::SignificantWords;

/// Extract the words of a normalized street name that actually identify the
/// street: everything except road-type abbreviations, honorifics, articles,
/// connectors and single-character tokens.
pub fn significant_words(name: &str) -> SignificantWords {
    name.split_whitespace()
        .filter(|word| word.len() > 1 && !NON_SIGNIFICANT_WORDS.contains(word))
        .map(|word| word.to_string())
        .collect()
}
