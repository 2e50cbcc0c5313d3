use crate::types::{Coordinate, HouseNumber};

/// Estimate a coordinate for `number` along a street from its known
/// `(house number, coordinate)` points, which must be sorted ascending by
/// number.
///
/// Numbers outside the known range clamp to the nearest endpoint. Between two
/// known numbers the position is interpolated linearly in both latitude and
/// longitude; a degenerate bracket (two points sharing a number) returns the
/// first point rather than dividing by zero.
pub fn interpolate_position(
    number: HouseNumber,
    points: &[(HouseNumber, Coordinate)],
) -> Option<Coordinate> {
    let first = points.first()?;
    let last = points.last()?;

    if number <= first.0 {
        return Some(first.1);
    }
    if number >= last.0 {
        return Some(last.1);
    }

    for window in points.windows(2) {
        let (n1, c1) = window[0];
        let (n2, c2) = window[1];

        if n1 <= number && number <= n2 {
            if n1 == n2 {
                return Some(c1);
            }
            let t = (number - n1) as f64 / (n2 - n1) as f64;
            return Some(Coordinate::new(
                c1.lat + t * (c2.lat - c1.lat),
                c1.lng + t * (c2.lng - c1.lng),
            ));
        }
    }

    None
}
