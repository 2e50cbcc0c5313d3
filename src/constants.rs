use crate::models::FuzzyMatchConfig;

pub const DEFAULT_FUZZY_MATCH_CONFIG: FuzzyMatchConfig = FuzzyMatchConfig {
    // Empirically chosen against the Montevideo door-number dataset; treat as
    // a starting point, not an optimum.
    similarity_threshold: 0.5,
    token_count_bonus: 0.05,
};

/// How many of the most frequent unresolved street names the stats report
/// keeps for diagnostics.
pub const TOP_UNRESOLVED_REPORT_SIZE: usize = 20;

/// Whole-word replacements applied during normalization, in order. An empty
/// replacement removes the word ("CALLE" is noise in this dataset).
pub const WORD_REPLACEMENTS: &[(&str, &str)] = &[
    ("AVENIDA", "AV"),
    ("BULEVAR", "BV"),
    ("CAMINO", "CNO"),
    ("RAMBLA", "RBLA"),
    ("PASAJE", "PSJE"),
    ("CALLE", ""),
    ("GENERAL", "GRAL"),
    ("DOCTOR", "DR"),
    ("ARQUITECTO", "ARQ"),
    ("INGENIERO", "ING"),
    ("CORONEL", "CNEL"),
    ("TENIENTE", "TTE"),
    ("CAPITAN", "CAP"),
    ("ALMIRANTE", "ALM"),
    ("PRESBITERO", "PBRO"),
    ("COMANDANTE", "CTE"),
    ("COMODORO", "CDRO"),
    ("GOBERNADOR", "GOB"),
    ("PRESIDENTE", "PTE"),
    ("MARISCAL", "MCAL"),
    ("PROFESOR", "PROF"),
    ("MAESTRO", "MTRO"),
    ("PBTRO", "PBRO"),
];

/// Accented characters mapped to their plain equivalents. Input is
/// uppercased before this table is consulted.
pub const ACCENT_REPLACEMENTS: &[(char, char)] = &[
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ú', 'U'),
    ('Ñ', 'N'),
];

/// Road-type short forms used by the variant generator when they appear at
/// the start or end of a name. "CAMI" is a legacy spelling of "CNO" that
/// still shows up in the reference data.
pub const ROAD_TYPE_SHORT_FORMS: &[&str] = &["AV", "BV", "RBLA", "CNO", "CAMI", "PSJE"];

/// Honorific/title short forms the variant generator may drop from a name.
pub const HONORIFIC_SHORT_FORMS: &[&str] = &["DR", "GRAL", "ARQ", "ING", "CNEL", "TTE", "CAP"];

/// Words that carry no identity when comparing street names: road types,
/// honorifics, articles and connectors.
pub const NON_SIGNIFICANT_WORDS: &[&str] = &[
    "AV", "BV", "CNO", "RBLA", "PSJE", "DR", "GRAL", "ING", "ARQ", "CNEL", "TTE", "CAP", "ALM",
    "PBRO", "CTE", "CDRO", "GOB", "PTE", "DE", "DEL", "LA", "LOS", "LAS", "Y", "DON", "DONA",
    "MCAL", "PROF", "MTRO", "NAL", "SIR", "FRAY", "SAN", "SANTA",
];

/// Hand-maintained full-name corrections for street spellings the rule-based
/// normalizer cannot fix (inverted word order, dropped honorifics, renamed
/// streets). Domain data, kept out of the algorithm.
pub const STREET_ALIAS_CSV: &str = include_str!("../data/street_aliases.csv");
