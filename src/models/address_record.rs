use crate::types::{Coordinate, HouseNumber, ZoneId};
use std::fmt;

/// The strategy that produced a record's coordinate. Declaration order is the
/// cascade's strict precedence order and drives stats reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResolutionMethod {
    Exact,
    Interpolated,
    Intersection,
    StreetCentroid,
    BlockNeighbor,
    ZoneStreet,
    ZoneCentroid,
}

impl ResolutionMethod {
    /// All methods in precedence order.
    pub const ALL: [ResolutionMethod; 7] = [
        ResolutionMethod::Exact,
        ResolutionMethod::Interpolated,
        ResolutionMethod::Intersection,
        ResolutionMethod::StreetCentroid,
        ResolutionMethod::BlockNeighbor,
        ResolutionMethod::ZoneStreet,
        ResolutionMethod::ZoneCentroid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMethod::Exact => "exact",
            ResolutionMethod::Interpolated => "interpolated",
            ResolutionMethod::Intersection => "intersection",
            ResolutionMethod::StreetCentroid => "street-centroid",
            ResolutionMethod::BlockNeighbor => "block-neighbor",
            ResolutionMethod::ZoneStreet => "zone-street",
            ResolutionMethod::ZoneCentroid => "zone-centroid",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One free-text address to resolve. The resolver reads the input fields and
/// writes only `coordinate` and `method`; everything else is caller-owned.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub street: Option<String>,
    pub house_number: Option<HouseNumber>,
    pub cross_street_1: Option<String>,
    pub cross_street_2: Option<String>,
    pub zone: Option<ZoneId>,

    pub coordinate: Option<Coordinate>,
    pub method: Option<ResolutionMethod>,
}

impl AddressRecord {
    pub fn new(street: Option<String>) -> Self {
        AddressRecord {
            street,
            house_number: None,
            cross_street_1: None,
            cross_street_2: None,
            zone: None,
            coordinate: None,
            method: None,
        }
    }

    pub fn with_house_number(mut self, house_number: HouseNumber) -> Self {
        self.house_number = Some(house_number);
        self
    }

    pub fn with_cross_streets(
        mut self,
        cross_street_1: Option<String>,
        cross_street_2: Option<String>,
    ) -> Self {
        self.cross_street_1 = cross_street_1;
        self.cross_street_2 = cross_street_2;
        self
    }

    pub fn with_zone(mut self, zone: ZoneId) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinate.is_some()
    }

    /// The house number usable for lookup, if any. Zero means "no number".
    pub fn effective_house_number(&self) -> Option<HouseNumber> {
        self.house_number.filter(|number| *number > 0)
    }

    pub(crate) fn assign(&mut self, coordinate: Coordinate, method: ResolutionMethod) {
        self.coordinate = Some(coordinate);
        self.method = Some(method);
    }
}
