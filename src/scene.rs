// src/scene.rs

use log::{debug, warn};

use crate::error::{SightError, SightResult};
use crate::geometry::{Endpoint, EndpointId, Obstacle, Point, Segment, SegmentId};

/// Occluding segments (arena ring + obstacle sides) and their endpoints.
///
/// Both live in flat arenas; a segment refers to its endpoints by index and
/// each endpoint refers back to its segment the same way. Coincident corners
/// are never merged.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    segments: Vec<Segment>,
    endpoints: Vec<Endpoint>,
    // Inner edge of the boundary ring, [lo, hi] on both axes.
    bounds: Option<(f64, f64)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the scene from a boundary margin and an obstacle list.
    ///
    /// The input is validated before anything is cleared, so a rejected map
    /// leaves the previous scene in place. Obstacles entirely outside the
    /// ring are dropped since no ray from inside can reach them.
    pub fn load_map(&mut self, margin: f64, obstacles: &[Obstacle]) -> SightResult<()> {
        if !margin.is_finite() || !(0.0..1.0).contains(&margin) {
            return Err(SightError::InvalidMargin { margin });
        }
        let (lo, hi) = (-1.0 + margin, 1.0 - margin);

        let mut accepted: Vec<(usize, &Obstacle)> = Vec::with_capacity(obstacles.len());
        for (index, obstacle) in obstacles.iter().enumerate() {
            if !obstacle.is_well_formed() {
                return Err(SightError::DegenerateObstacle { index });
            }
            if obstacle.is_outside(lo, hi) {
                warn!("Skipping obstacle {} at {:?}: outside the arena.", index, obstacle.center);
                continue;
            }
            if !obstacle.is_inside(lo, hi) {
                return Err(SightError::ObstacleCrossesBoundary { index });
            }
            if let Some(&(first, _)) = accepted.iter().find(|(_, other)| other.overlaps(obstacle)) {
                return Err(SightError::ObstacleOverlap { first, second: index });
            }
            accepted.push((index, obstacle));
        }

        self.segments.clear();
        self.endpoints.clear();
        self.bounds = Some((lo, hi));

        self.load_edge_of_map(lo, hi);
        for (_, obstacle) in &accepted {
            let [bottom_left, top_left, top_right, bottom_right] = obstacle.corners();
            self.add_segment(bottom_left, top_left);
            self.add_segment(top_left, top_right);
            self.add_segment(top_right, bottom_right);
            self.add_segment(bottom_right, bottom_left);
        }

        debug!(
            "Loaded map: margin {}, {} of {} obstacles, {} segments, {} endpoints.",
            margin,
            accepted.len(),
            obstacles.len(),
            self.segments.len(),
            self.endpoints.len()
        );
        Ok(())
    }

    // Clockwise ring: top, right, bottom, left.
    fn load_edge_of_map(&mut self, lo: f64, hi: f64) {
        self.add_segment(Point::new(lo, hi), Point::new(hi, hi));
        self.add_segment(Point::new(hi, hi), Point::new(hi, lo));
        self.add_segment(Point::new(hi, lo), Point::new(lo, lo));
        self.add_segment(Point::new(lo, lo), Point::new(lo, hi));
    }

    fn add_segment(&mut self, a: Point, b: Point) -> SegmentId {
        let segment_id = self.segments.len();
        let p1 = self.push_endpoint(a, segment_id);
        let p2 = self.push_endpoint(b, segment_id);
        self.segments.push(Segment { p1, p2 });
        segment_id
    }

    fn push_endpoint(&mut self, point: Point, segment: SegmentId) -> EndpointId {
        self.endpoints.push(Endpoint::new(point, segment));
        self.endpoints.len() - 1
    }

    /// Refreshes every endpoint's angle and direction for a new light.
    pub fn orient_to(&mut self, light: Point) {
        for endpoint in &mut self.endpoints {
            endpoint.orient_to(light);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn endpoint(&self, id: EndpointId) -> &Endpoint {
        &self.endpoints[id]
    }

    /// Start point and edge vector `(q, s)` of a segment.
    pub fn segment_vector(&self, id: SegmentId) -> (Point, Point) {
        let segment = &self.segments[id];
        let q = self.endpoints[segment.p1].point;
        (q, self.endpoints[segment.p2].point - q)
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    /// Strictly inside the boundary ring.
    pub fn contains(&self, point: Point) -> bool {
        match self.bounds {
            Some((lo, hi)) => lo < point.x && point.x < hi && lo < point.y && point.y < hi,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_obstacles() -> Vec<Obstacle> {
        vec![Obstacle::new(-0.5, 0.5, 0.2), Obstacle::new(0.5, -0.5, 0.2)]
    }

    #[test]
    fn ring_and_obstacles_produce_four_segments_each() {
        let mut scene = Scene::new();
        scene.load_map(0.1, &demo_obstacles()).unwrap();
        assert_eq!(scene.segments().len(), 12);
        assert_eq!(scene.endpoints().len(), 24);
        assert_eq!(scene.bounds(), Some((-0.9, 0.9)));
    }

    #[test]
    fn every_endpoint_belongs_to_exactly_one_segment() {
        let mut scene = Scene::new();
        scene.load_map(0.1, &demo_obstacles()).unwrap();
        let mut owners = vec![0usize; scene.endpoints().len()];
        for (segment_id, segment) in scene.segments().iter().enumerate() {
            for endpoint_id in [segment.p1, segment.p2] {
                owners[endpoint_id] += 1;
                assert_eq!(scene.endpoint(endpoint_id).segment, segment_id);
            }
        }
        assert!(owners.iter().all(|&count| count == 1));
    }

    #[test]
    fn corners_are_not_merged() {
        let mut scene = Scene::new();
        scene.load_map(0.1, &[]).unwrap();
        let top_right = Point::new(0.9, 0.9);
        let copies = scene
            .endpoints()
            .iter()
            .filter(|endpoint| endpoint.point == top_right)
            .count();
        assert_eq!(copies, 2);
    }

    #[test]
    fn boundary_ring_is_clockwise() {
        let mut scene = Scene::new();
        scene.load_map(0.1, &[]).unwrap();
        let (q, s) = scene.segment_vector(0);
        assert_eq!(q, Point::new(-0.9, 0.9));
        assert_eq!(s, Point::new(1.8, 0.0));
        let (q, s) = scene.segment_vector(1);
        assert_eq!(q, Point::new(0.9, 0.9));
        assert_eq!(s, Point::new(0.0, -1.8));
    }

    #[test]
    fn rejects_bad_margins() {
        let mut scene = Scene::new();
        for margin in [-0.1, 1.0, 2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                scene.load_map(margin, &[]),
                Err(SightError::InvalidMargin { .. })
            ));
        }
        assert!(scene.is_empty());
    }

    #[test]
    fn rejects_degenerate_and_overlapping_obstacles() {
        let mut scene = Scene::new();
        assert_eq!(
            scene.load_map(0.1, &[Obstacle::new(0.0, 0.0, 0.0)]),
            Err(SightError::DegenerateObstacle { index: 0 })
        );
        assert_eq!(
            scene.load_map(0.1, &[Obstacle::new(0.0, f64::NAN, 0.1)]),
            Err(SightError::DegenerateObstacle { index: 0 })
        );
        assert_eq!(
            scene.load_map(
                0.1,
                &[
                    Obstacle::new(-0.5, 0.0, 0.1),
                    Obstacle::new(0.5, 0.0, 0.1),
                    Obstacle::new(0.55, 0.05, 0.1),
                ]
            ),
            Err(SightError::ObstacleOverlap { first: 1, second: 2 })
        );
        assert_eq!(
            scene.load_map(0.1, &[Obstacle::new(0.85, 0.0, 0.1)]),
            Err(SightError::ObstacleCrossesBoundary { index: 0 })
        );
    }

    #[test]
    fn rejected_map_keeps_previous_scene() {
        let mut scene = Scene::new();
        scene.load_map(0.1, &demo_obstacles()).unwrap();
        let before = scene.segments().len();
        assert!(scene.load_map(0.1, &[Obstacle::new(0.0, 0.0, -1.0)]).is_err());
        assert_eq!(scene.segments().len(), before);
        assert_eq!(scene.bounds(), Some((-0.9, 0.9)));
    }

    #[test]
    fn obstacles_outside_the_ring_are_skipped() {
        let mut scene = Scene::new();
        scene.load_map(0.1, &[Obstacle::new(1.5, 1.5, 0.2)]).unwrap();
        assert_eq!(scene.segments().len(), 4);
    }

    #[test]
    fn orient_to_refreshes_every_endpoint() {
        let mut scene = Scene::new();
        scene.load_map(0.1, &demo_obstacles()).unwrap();
        let light = Point::new(0.1, -0.2);
        scene.orient_to(light);
        for endpoint in scene.endpoints() {
            assert_eq!(endpoint.direction, endpoint.point - light);
            let expected = (endpoint.point.y - light.y).atan2(endpoint.point.x - light.x);
            assert_eq!(endpoint.angle, expected);
        }
    }

    #[test]
    fn contains_is_strict() {
        let mut scene = Scene::new();
        assert!(!scene.contains(Point::ZERO));
        scene.load_map(0.1, &[]).unwrap();
        assert!(scene.contains(Point::ZERO));
        assert!(!scene.contains(Point::new(0.9, 0.0)));
        assert!(!scene.contains(Point::new(0.0, -0.95)));
    }
}
