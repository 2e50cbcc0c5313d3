pub mod generate_street_variants;
pub mod interpolate_position;
pub mod jaccard_similarity_words;
pub mod mean_coordinate;
pub mod significant_words;

pub use generate_street_variants::generate_street_variants;
pub use interpolate_position::interpolate_position;
pub use jaccard_similarity_words::jaccard_similarity_words;
pub use mean_coordinate::mean_coordinate;
pub use significant_words::significant_words;
