// src/demo_scene.rs

use sight_and_light::{Obstacle, Sight, SightConfig, SightResult};

pub const MARGIN: f64 = 0.1;

pub fn demo_obstacles() -> Vec<Obstacle> {
    vec![
        Obstacle::new(-0.5, 0.5, 0.2),
        Obstacle::new(0.5, -0.5, 0.2),
    ]
}

pub fn create_demo_sight() -> SightResult<Sight> {
    let mut sight = Sight::new(SightConfig::default());
    sight.load_map(MARGIN, &demo_obstacles())?;
    Ok(sight)
}
