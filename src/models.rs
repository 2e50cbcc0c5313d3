pub mod address_record;
pub use address_record::{AddressRecord, ResolutionMethod};

pub mod error;
pub use error::Error;

pub mod fuzzy_matcher;
pub use fuzzy_matcher::{FuzzyMatchConfig, FuzzyMatcher, MatchCache};

pub mod cascade;
pub use cascade::{FallbackCascade, ResolutionStats};

pub mod normalizer;
pub use normalizer::{NormalizedName, StreetNameNormalizer};

pub mod point_resolver;
pub use point_resolver::PointResolver;

pub mod street_index;
pub use street_index::{ReferencePoint, StreetIndex};
