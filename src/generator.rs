// src/generator.rs

use rand::Rng;
use crate::geometry::Obstacle;

// Rejection sampling gives up after this many misses per obstacle.
const MAX_ATTEMPTS_PER_OBSTACLE: usize = 64;

pub struct ObstacleGenerator;

impl ObstacleGenerator {
    /// Random square obstacles that fit inside the ring inset by `margin`
    /// and never overlap each other. May return fewer than `count` when the
    /// arena gets crowded.
    pub fn generate_layout(
        rng: &mut impl Rng,
        count: usize,
        margin: f64,
        min_half_extent: f64,
        max_half_extent: f64,
    ) -> Vec<Obstacle> {
        let hi = 1.0 - margin;
        let mut obstacles: Vec<Obstacle> = Vec::with_capacity(count);

        for _ in 0..count {
            for _ in 0..MAX_ATTEMPTS_PER_OBSTACLE {
                let half_extent = if max_half_extent > min_half_extent {
                    rng.gen_range(min_half_extent..max_half_extent)
                } else {
                    min_half_extent
                };
                let reach = hi - half_extent;
                if reach <= 0.0 {
                    break;
                }
                let candidate = Obstacle::new(
                    rng.gen_range(-reach..reach),
                    rng.gen_range(-reach..reach),
                    half_extent,
                );
                if !obstacles.iter().any(|other| other.overlaps(&candidate)) {
                    obstacles.push(candidate);
                    break;
                }
            }
        }

        obstacles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn layouts_stay_inside_and_apart() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let layout = ObstacleGenerator::generate_layout(&mut rng, 12, 0.1, 0.02, 0.1);
            assert!(!layout.is_empty());
            for (i, a) in layout.iter().enumerate() {
                assert!(a.is_inside(-0.9, 0.9));
                for b in &layout[i + 1..] {
                    assert!(!a.overlaps(b));
                }
            }
        }
    }

    #[test]
    fn oversized_obstacles_are_not_placed() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout = ObstacleGenerator::generate_layout(&mut rng, 3, 0.1, 0.95, 0.95);
        assert!(layout.is_empty());
    }
}
