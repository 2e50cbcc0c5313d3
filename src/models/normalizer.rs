use crate::constants::{ACCENT_REPLACEMENTS, STREET_ALIAS_CSV, WORD_REPLACEMENTS};
use crate::models::Error;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;

/// The canonical, comparable form of a raw street name: uppercase,
/// accent-stripped, punctuation-stripped, whitespace-collapsed, with
/// road-type and honorific words reduced to their standard abbreviations.
///
/// Normalization is idempotent, so a `NormalizedName`'s string form
/// re-normalizes to itself. The empty name never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn empty() -> Self {
        NormalizedName(String::new())
    }

    pub(crate) fn from_canonical(name: String) -> Self {
        NormalizedName(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalizes raw street names into `NormalizedName`s.
///
/// All rule data is loaded once at construction: the whole-word replacement
/// table and accent map are compile-time constants, and the hand-maintained
/// alias table comes from the embedded `data/street_aliases.csv`. After
/// construction, `normalize` is a pure function.
pub struct StreetNameNormalizer {
    aliases: HashMap<String, String>,
}

impl StreetNameNormalizer {
    /// Build a normalizer with the embedded alias table.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded alias CSV is malformed (missing
    /// headers or short rows).
    pub fn new() -> Result<Self, Error> {
        let aliases = Self::read_alias_table_from_string(STREET_ALIAS_CSV)?;
        Ok(StreetNameNormalizer { aliases })
    }

    /// Parse an alias table from a CSV-formatted string with `raw_name` and
    /// `canonical_name` columns.
    ///
    /// Keys are cleaned on load (uppercased, period-stripped,
    /// whitespace-collapsed) to match the lookup form. Values are pushed
    /// through the full rule pipeline so an alias hit always yields an
    /// already-canonical name and normalization stays idempotent no matter
    /// how the table was typed in.
    pub fn read_alias_table_from_string(csv_str: &str) -> Result<HashMap<String, String>, Error> {
        let mut aliases = HashMap::new();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv_str));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read alias headers: {}", e)))?
            .clone();

        let raw_pos = headers
            .iter()
            .position(|h| h == "raw_name")
            .ok_or_else(|| Error::ParserError("Missing 'raw_name' column".to_string()))?;
        let canonical_pos = headers
            .iter()
            .position(|h| h == "canonical_name")
            .ok_or_else(|| Error::ParserError("Missing 'canonical_name' column".to_string()))?;

        for record in reader.records() {
            let record = record
                .map_err(|e| Error::ParserError(format!("Failed to read alias record: {}", e)))?;

            let raw_name = record
                .get(raw_pos)
                .ok_or_else(|| Error::ParserError("Missing 'raw_name' field".to_string()))?;
            let canonical_name = record
                .get(canonical_pos)
                .ok_or_else(|| Error::ParserError("Missing 'canonical_name' field".to_string()))?;

            let key = clean_whitespace_and_periods(&raw_name.to_uppercase());
            let value = apply_rules(&clean_whitespace_and_periods(&canonical_name.to_uppercase()));
            aliases.insert(key, value);
        }

        Ok(aliases)
    }

    /// Normalize a raw street name. Absent input yields the empty name.
    pub fn normalize_opt(&self, raw: Option<&str>) -> NormalizedName {
        match raw {
            Some(name) => self.normalize(name),
            None => NormalizedName::empty(),
        }
    }

    /// Normalize a raw street name.
    ///
    /// The alias table is consulted both before and after accent stripping,
    /// since its keys may be spelled either way; a hit short-circuits the
    /// remaining rules and returns the alias target.
    pub fn normalize(&self, raw: &str) -> NormalizedName {
        let uppercased = raw.to_uppercase();
        let cleaned = clean_whitespace_and_periods(&uppercased);
        if cleaned.is_empty() {
            return NormalizedName::empty();
        }

        if let Some(canonical) = self.aliases.get(&cleaned) {
            return NormalizedName::from_canonical(canonical.clone());
        }

        let unaccented = strip_accents(&cleaned);
        if let Some(canonical) = self.aliases.get(&unaccented) {
            return NormalizedName::from_canonical(canonical.clone());
        }

        NormalizedName::from_canonical(apply_rules(&unaccented))
    }
}

/// Remove periods and collapse runs of whitespace.
fn clean_whitespace_and_periods(name: &str) -> String {
    name.replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace accented vowels and Ñ with their plain equivalents.
fn strip_accents(name: &str) -> String {
    name.chars()
        .map(|c| {
            ACCENT_REPLACEMENTS
                .iter()
                .find(|(accented, _)| *accented == c)
                .map_or(c, |(_, plain)| *plain)
        })
        .collect()
}

/// The rule half of normalization, after alias lookup: remaining punctuation
/// becomes a word boundary, accents are stripped, and each whole word is
/// mapped through the replacement table. Words that map to the empty string
/// are dropped.
fn apply_rules(name: &str) -> String {
    let depunctuated: String = strip_accents(name)
        .chars()
        .map(|c| if matches!(c, ',' | '(' | ')') { ' ' } else { c })
        .collect();

    depunctuated
        .split_whitespace()
        .map(|word| {
            WORD_REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == word)
                .map_or(word, |(_, to)| *to)
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> StreetNameNormalizer {
        StreetNameNormalizer::new().expect("embedded alias table should parse")
    }

    #[test]
    fn test_alias_values_are_canonical() {
        // Every alias target must survive re-normalization unchanged,
        // otherwise aliased records and indexed reference names diverge.
        let normalizer = normalizer();
        for canonical in normalizer.aliases.values() {
            let renormalized = normalizer.normalize(canonical);
            assert_eq!(renormalized.as_str(), canonical);
        }
    }

    #[test]
    fn test_clean_whitespace_and_periods() {
        assert_eq!(
            clean_whitespace_and_periods("  GRAL.   FLORES "),
            "GRAL FLORES"
        );
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("ÑANDÚ"), "NANDU");
    }

    #[test]
    fn test_word_replacements_are_whole_word() {
        // "CALLEJON" contains "CALLE" but must not be truncated by the
        // CALLE-removal rule.
        let normalizer = normalizer();
        assert_eq!(normalizer.normalize("Callejon Ancho").as_str(), "CALLEJON ANCHO");
    }
}
