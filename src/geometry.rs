// src/geometry.rs

use glam::DVec2;

/// A position or direction in normalized device coordinates.
pub type Point = DVec2;

// Indices into the scene's segment and endpoint arenas.
pub type SegmentId = usize;
pub type EndpointId = usize;

#[inline(always)]
pub fn cross(v: Point, w: Point) -> f64 {
    v.x * w.y - v.y * w.x
}

#[inline(always)]
pub fn subtract(v: Point, w: Point) -> Point {
    Point::new(v.x - w.x, v.y - w.y)
}

/// Axis-aligned square occluder, `(x, y, half_extent)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub center: Point,
    pub half_extent: f64,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, half_extent: f64) -> Self {
        Self {
            center: Point::new(x, y),
            half_extent,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.center.is_finite() && self.half_extent.is_finite() && self.half_extent > 0.0
    }

    pub fn min(&self) -> Point {
        self.center - Point::splat(self.half_extent)
    }

    pub fn max(&self) -> Point {
        self.center + Point::splat(self.half_extent)
    }

    // Clockwise from the bottom-left corner; consecutive pairs are the sides.
    pub fn corners(&self) -> [Point; 4] {
        let (lo, hi) = (self.min(), self.max());
        [
            Point::new(lo.x, lo.y),
            Point::new(lo.x, hi.y),
            Point::new(hi.x, hi.y),
            Point::new(hi.x, lo.y),
        ]
    }

    /// Interiors intersect. Shared edges or corners do not count.
    pub fn overlaps(&self, other: &Obstacle) -> bool {
        let (a_lo, a_hi) = (self.min(), self.max());
        let (b_lo, b_hi) = (other.min(), other.max());
        a_lo.x < b_hi.x && b_lo.x < a_hi.x && a_lo.y < b_hi.y && b_lo.y < a_hi.y
    }

    pub fn is_inside(&self, lo: f64, hi: f64) -> bool {
        let (min, max) = (self.min(), self.max());
        min.x >= lo && min.y >= lo && max.x <= hi && max.y <= hi
    }

    pub fn is_outside(&self, lo: f64, hi: f64) -> bool {
        let (min, max) = (self.min(), self.max());
        max.x <= lo || max.y <= lo || min.x >= hi || min.y >= hi
    }
}

/// One occluding edge, `p1 -> p2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub p1: EndpointId,
    pub p2: EndpointId,
}

/// A segment terminus annotated relative to the current light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoint {
    pub point: Point,
    pub angle: f64,
    pub direction: Point,
    pub segment: SegmentId,
}

impl Endpoint {
    pub fn new(point: Point, segment: SegmentId) -> Self {
        Self {
            point,
            angle: 0.0,
            direction: Point::ZERO,
            segment,
        }
    }

    pub fn orient_to(&mut self, light: Point) {
        self.direction = subtract(self.point, light);
        self.angle = self.direction.y.atan2(self.direction.x);
    }
}

// Which perturbation table applies to a corner at `angle` (as returned by atan2).
pub fn first_or_third(angle: f64) -> bool {
    use std::f64::consts::{FRAC_PI_2, PI};
    (0.0..=FRAC_PI_2).contains(&angle) || (-PI < angle && angle < -FRAC_PI_2)
}
