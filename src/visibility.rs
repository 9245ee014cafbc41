// src/visibility.rs

use log::trace;

use crate::config::SightConfig;
use crate::error::{SightError, SightResult};
use crate::geometry::{cross, first_or_third, subtract, Endpoint, Obstacle, Point, SegmentId};
use crate::mesh::{RayHit, VisibilityMesh};
use crate::polar::polar_order;
use crate::scene::Scene;

/// Angular-sweep visibility engine for a single point light.
///
/// Owns the scene; every light update recomputes the fan from scratch.
#[derive(Clone, Debug, Default)]
pub struct Sight {
    config: SightConfig,
    scene: Scene,
    center: Point,
    rays: Vec<RayHit>,
}

impl Sight {
    pub fn new(config: SightConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SightConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn light(&self) -> Point {
        self.center
    }

    pub fn load_map(&mut self, margin: f64, obstacles: &[Obstacle]) -> SightResult<()> {
        self.scene.load_map(margin, obstacles)
    }

    /// Moves the light to `(x, y)` and returns the new visibility fan.
    ///
    /// The light must be finite and strictly inside the boundary ring. On
    /// error the previous light position is kept.
    ///
    /// Obstacles do not constrain the light: from inside an obstacle the fan
    /// is that obstacle's interior, and from on one of its edges the fan
    /// collapses to zero area.
    pub fn update_light(&mut self, x: f64, y: f64) -> SightResult<VisibilityMesh> {
        let light = Point::new(x, y);
        if !light.is_finite() {
            return Err(SightError::InvalidLight { x, y });
        }
        if self.scene.is_empty() {
            return Err(SightError::EmptyScene);
        }
        if !self.scene.contains(light) {
            return Err(SightError::LightOutsideArena { x, y });
        }

        self.center = light;
        self.scene.orient_to(light);
        self.sweep()
    }

    pub fn move_light(&mut self, dx: f64, dy: f64) -> SightResult<VisibilityMesh> {
        self.update_light(self.center.x + dx, self.center.y + dy)
    }

    fn sweep(&mut self) -> SightResult<VisibilityMesh> {
        let center = self.center;
        self.rays.clear();

        for (endpoint_id, endpoint) in self.scene.endpoints().iter().enumerate() {
            for direction in sample_directions(endpoint, self.config.epsilon) {
                // Light sitting exactly on this corner.
                if direction == Point::ZERO {
                    continue;
                }
                let angle = direction.y.atan2(direction.x);
                let (t, segment) = cast_ray(&self.scene, center, direction)
                    .ok_or(SightError::UnboundedRay { angle })?;
                self.rays.push(RayHit {
                    point: center + direction * t,
                    angle,
                    endpoint: endpoint_id,
                    segment,
                    t,
                });
            }
        }
        let sampled = self.rays.len();

        self.rays.sort_by(|a, b| polar_order(center, a.point, b.point));
        if self.config.compact_rays {
            compact_ring(&mut self.rays, self.config.merge_tolerance);
        }

        trace!(
            "Sweep from ({:.4}, {:.4}): {} samples, {} rays.",
            center.x,
            center.y,
            sampled,
            self.rays.len()
        );
        Ok(VisibilityMesh::from_ring(center, self.rays.clone()))
    }
}

// First and third quadrant.
const ADJUSTMENTS_1: [(f64, f64); 3] = [(-1.0, 1.0), (0.0, 0.0), (1.0, -1.0)];
// Second and fourth quadrant.
const ADJUSTMENTS_2: [(f64, f64); 3] = [(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0)];

/// The corner direction itself plus one nudge to either side of it.
pub fn sample_directions(endpoint: &Endpoint, epsilon: f64) -> [Point; 3] {
    let table = if first_or_third(endpoint.angle) {
        ADJUSTMENTS_1
    } else {
        ADJUSTMENTS_2
    };
    table.map(|(ax, ay)| endpoint.direction + Point::new(ax * epsilon, ay * epsilon))
}

/// Nearest segment hit along `origin + direction * t`, `t >= 0`.
///
/// Returns `(t, segment)`. Segments parallel to the ray are skipped; the
/// exact `== 0.0` test is deliberate, the sampling nudges keep real sweeps
/// off the parallel case.
pub fn cast_ray(scene: &Scene, origin: Point, direction: Point) -> Option<(f64, SegmentId)> {
    let mut nearest: Option<(f64, SegmentId)> = None;
    for segment_id in 0..scene.segments().len() {
        let (q, s) = scene.segment_vector(segment_id);
        let rxs = cross(direction, s);
        if rxs == 0.0 {
            continue;
        }
        let q_p = subtract(q, origin);
        let t = cross(q_p, s) / rxs;
        let u = cross(q_p, direction) / rxs;
        if t >= 0.0 && (0.0..=1.0).contains(&u) && nearest.map_or(true, |(best, _)| t < best) {
            nearest = Some((t, segment_id));
        }
    }
    nearest
}

/// Drops ring vertices that do not change the covered region: repeats of
/// the previous hit, and hits lying on the straight line between their two
/// neighbours.
pub fn compact_ring(rays: &mut Vec<RayHit>, tolerance: f64) {
    rays.dedup_by(|next, prev| prev.point.distance(next.point) <= tolerance);
    while rays.len() > 1 && rays[0].point.distance(rays[rays.len() - 1].point) <= tolerance {
        rays.pop();
    }

    while rays.len() > 3 {
        let n = rays.len();
        let redundant = (0..n).find(|&i| {
            let prev = rays[(i + n - 1) % n].point;
            let cur = rays[i].point;
            let next = rays[(i + 1) % n].point;
            let (a, b) = (cur - prev, next - cur);
            a.dot(b) > 0.0 && cross(a, b).abs() <= tolerance * a.length() * b.length()
        });
        match redundant {
            Some(i) => {
                rays.remove(i);
            }
            None => break,
        }
    }
}
