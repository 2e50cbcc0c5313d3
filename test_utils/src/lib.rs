use callejero::{AddressRecord, Coordinate, ReferencePoint};

/// Shorthand for a numbered reference point with a valid coordinate.
pub fn reference_point(street: &str, number: u32, lat: f64, lng: f64) -> ReferencePoint {
    ReferencePoint::new(street, Some(number), Some(Coordinate::new(lat, lng)))
}

/// The two-point AV ITALIA street used by the interpolation examples.
pub fn av_italia_reference_points() -> Vec<ReferencePoint> {
    vec![
        reference_point("AV ITALIA", 100, -34.90, -56.16),
        reference_point("AV ITALIA", 300, -34.91, -56.17),
    ]
}

/// A small but varied reference set: numbered streets for exact lookup and
/// interpolation, a cross street for intersection estimation, and a street
/// with a number-less point that still counts for centroids.
pub fn montevideo_reference_points() -> Vec<ReferencePoint> {
    let mut points = av_italia_reference_points();
    points.extend([
        reference_point("AV GRAL RIVERA", 1000, -34.905, -56.175),
        reference_point("AV GRAL RIVERA", 2000, -34.910, -56.185),
        reference_point("BV GRAL ARTIGAS", 500, -34.895, -56.180),
        reference_point("BV GRAL ARTIGAS", 1500, -34.885, -56.170),
        reference_point("JOSE LLUPES", 50, -34.870, -56.200),
        reference_point("JOSE LLUPES", 150, -34.872, -56.202),
        ReferencePoint::new("CNO CARRASCO", None, Some(Coordinate::new(-34.880, -56.130))),
        // No coordinate: must be skipped at indexing.
        ReferencePoint::new("CNO CARRASCO", Some(4000), None),
    ]);
    points
}

/// A record carrying only a street name.
pub fn street_record(street: &str) -> AddressRecord {
    AddressRecord::new(Some(street.to_string()))
}

/// A record that arrives already resolved, the way upstream GPS data does;
/// the cascade must leave it alone but may average from it.
pub fn seeded_record(
    street: Option<&str>,
    cross_street_1: Option<&str>,
    cross_street_2: Option<&str>,
    zone: Option<u16>,
    coordinate: Coordinate,
) -> AddressRecord {
    let mut record = AddressRecord::new(street.map(str::to_string)).with_cross_streets(
        cross_street_1.map(str::to_string),
        cross_street_2.map(str::to_string),
    );
    record.zone = zone;
    record.coordinate = Some(coordinate);
    record
}
