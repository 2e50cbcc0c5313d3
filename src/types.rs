// Types listed here are either shared across multiple files and/or exposed via the library.

/// A house (door) number along a street. Zero and negative input values are
/// treated as "no number" before they ever reach this type.
pub type HouseNumber = u32;

/// An administrative zone identifier (e.g. a municipal service-center code)
/// used for coarse fallback resolution.
pub type ZoneId = u16;

/// A reference street name in its normalized string form, as stored inside
/// the `StreetIndex`.
pub type IndexedStreetName = String;

/// The significant words of a normalized street name: tokens excluding
/// road-type abbreviations, honorifics and short connector words.
pub type SignificantWords = Vec<String>;

/// A geographic coordinate in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }

    /// Squared Euclidean distance in coordinate space.
    ///
    /// Note: geodesic distortion is ignored. At city scale the error is small
    /// enough for nearest-point selection, which is the only use of this.
    pub fn squared_distance_to(&self, other: &Coordinate) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lng = self.lng - other.lng;
        d_lat * d_lat + d_lng * d_lng
    }
}
