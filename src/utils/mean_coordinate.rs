use crate::types::Coordinate;

/// Arithmetic mean of a set of coordinates, or `None` for an empty set.
pub fn mean_coordinate(points: &[Coordinate]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let lat_sum: f64 = points.iter().map(|p| p.lat).sum();
    let lng_sum: f64 = points.iter().map(|p| p.lng).sum();

    Some(Coordinate::new(lat_sum / count, lng_sum / count))
}
