// src/arena.rs

use crate::geometry::Point;

/// Maps a pointer position in window pixels (origin top-left, +y down) to a
/// light position in NDC (+y up). The pointer is first clamped to the
/// window inset by `margin` of its size on every side, which keeps the
/// light inside a boundary ring loaded with the same margin.
pub fn cursor_to_light(cursor: (f64, f64), viewport: (f64, f64), margin: f64) -> Point {
    let (width, height) = viewport;
    let x = cursor.0.clamp(width * margin, width - width * margin);
    let y = cursor.1.clamp(height * margin, height - height * margin);
    Point::new(2.0 * x / width - 1.0, -(2.0 * y / height - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_center_maps_to_origin() {
        assert_eq!(cursor_to_light((400.0, 300.0), (800.0, 600.0), 0.1), Point::ZERO);
    }

    #[test]
    fn y_axis_is_flipped() {
        let light = cursor_to_light((400.0, 150.0), (800.0, 600.0), 0.1);
        assert!((light.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pointer_is_clamped_to_the_margin() {
        let light = cursor_to_light((-50.0, 10_000.0), (800.0, 600.0), 0.1);
        assert!((light.x + 0.8).abs() < 1e-12);
        assert!((light.y + 0.8).abs() < 1e-12);
    }
}
