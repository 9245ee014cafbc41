// src/polar.rs

use std::cmp::Ordering;

use crate::geometry::{cross, subtract, Point};

/// Total order of points around `center`: counter-clockwise starting at the
/// +x axis, ties on the same ray broken by distance. Coincident points are
/// `Equal`. Inputs must be finite.
pub fn polar_order(center: Point, a: Point, b: Point) -> Ordering {
    let d1 = subtract(a, center);
    let d2 = subtract(b, center);

    // Upper half-plane (dy >= 0) comes first.
    if d1.y >= 0.0 && d2.y < 0.0 {
        return Ordering::Less;
    } else if d2.y >= 0.0 && d1.y < 0.0 {
        return Ordering::Greater;
    } else if d1.y == 0.0 && d2.y == 0.0 {
        if d1.x >= 0.0 && d2.x < 0.0 {
            return Ordering::Less;
        } else if d2.x >= 0.0 && d1.x < 0.0 {
            return Ordering::Greater;
        }
    }

    let area2 = cross(d1, d2);
    if area2 > 0.0 {
        Ordering::Less
    } else if area2 < 0.0 {
        Ordering::Greater
    } else {
        d1.length_squared()
            .partial_cmp(&d2.length_squared())
            .unwrap_or(Ordering::Equal)
    }
}

pub fn is_polar_sorted(center: Point, points: &[Point]) -> bool {
    points
        .windows(2)
        .all(|pair| polar_order(center, pair[0], pair[1]) != Ordering::Greater)
}
