// src/mesh.rs

use crate::geometry::{cross, EndpointId, Point, SegmentId};
use crate::vertex::Vertex;

/// Where one sampled ray stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub point: Point,
    /// Angle of the sampled direction, not of the corner that produced it.
    pub angle: f64,
    pub endpoint: EndpointId,
    pub segment: SegmentId,
    pub t: f64,
}

/// Triangle fan around the light: `(center, ray[i], ray[i + 1])`, closed
/// back onto the first ray.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityMesh {
    center: Point,
    rays: Vec<RayHit>,
    vertices: Vec<Point>,
}

impl VisibilityMesh {
    /// Builds the fan from a ring already in polar order around `center`.
    pub fn from_ring(center: Point, rays: Vec<RayHit>) -> Self {
        let mut closed: Vec<Point> = rays.iter().map(|ray| ray.point).collect();
        if let Some(&first) = closed.first() {
            closed.push(first);
        }

        let mut vertices = Vec::with_capacity(rays.len() * 3);
        for pair in closed.windows(2) {
            vertices.push(center);
            vertices.push(pair[0]);
            vertices.push(pair[1]);
        }

        Self {
            center,
            rays,
            vertices,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn rays(&self) -> &[RayHit] {
        &self.rays
    }

    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    /// Flat vertex list, three per triangle.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    // x0, y0, x1, y1, ...
    pub fn flat_coords(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|v| [v.x, v.y]).collect()
    }

    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .map(|v| Vertex::new(v.x as f32, v.y as f32))
            .collect()
    }

    /// Sum of the (unsigned) triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| cross(b - a, c - a).abs() / 2.0)
            .sum()
    }

    /// Whether `point` falls inside (or on the edge of) any fan triangle.
    pub fn is_lit(&self, point: Point) -> bool {
        self.triangles().any(|[a, b, c]| {
            let d1 = cross(b - a, point - a);
            let d2 = cross(c - b, point - b);
            let d3 = cross(a - c, point - c);
            let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
            let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
            // Zero-area slivers would otherwise light their whole supporting line.
            cross(b - a, c - a) != 0.0 && !(has_neg && has_pos)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(x: f64, y: f64) -> RayHit {
        RayHit {
            point: Point::new(x, y),
            angle: y.atan2(x),
            endpoint: 0,
            segment: 0,
            t: 1.0,
        }
    }

    fn square() -> VisibilityMesh {
        VisibilityMesh::from_ring(
            Point::ZERO,
            vec![hit(0.5, 0.5), hit(-0.5, 0.5), hit(-0.5, -0.5), hit(0.5, -0.5)],
        )
    }

    #[test]
    fn ring_closes_back_onto_first_ray() {
        let mesh = square();
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.vertices().len(), 12);
        let last: Vec<[Point; 3]> = mesh.triangles().skip(3).collect();
        assert_eq!(
            last[0],
            [Point::ZERO, Point::new(0.5, -0.5), Point::new(0.5, 0.5)]
        );
    }

    #[test]
    fn every_triangle_starts_at_the_light() {
        let mesh = square();
        assert!(mesh.triangles().all(|[apex, _, _]| apex == mesh.center()));
    }

    #[test]
    fn flat_coords_and_gpu_vertices_follow_vertex_order() {
        let mesh = square();
        let coords = mesh.flat_coords();
        assert_eq!(coords.len(), 24);
        assert_eq!(&coords[..6], &[0.0, 0.0, 0.5, 0.5, -0.5, 0.5]);
        let gpu = mesh.to_vertices();
        assert_eq!(gpu.len(), 12);
        assert_eq!(gpu[1], Vertex::new(0.5, 0.5));
    }

    #[test]
    fn area_and_point_queries() {
        let mesh = square();
        assert!((mesh.area() - 1.0).abs() < 1e-12);
        assert!(mesh.is_lit(Point::new(0.1, 0.4)));
        assert!(mesh.is_lit(Point::new(0.5, 0.0)));
        assert!(!mesh.is_lit(Point::new(0.6, 0.0)));
    }

    #[test]
    fn empty_ring_has_no_triangles() {
        let mesh = VisibilityMesh::from_ring(Point::ZERO, Vec::new());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.area(), 0.0);
        assert!(!mesh.is_lit(Point::ZERO));
    }
}
