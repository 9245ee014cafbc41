// src/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SightError {
    #[error("margin must be finite and within [0, 1), got {margin}")]
    InvalidMargin { margin: f64 },

    #[error("obstacle {index} must have a finite center and a positive half extent")]
    DegenerateObstacle { index: usize },

    #[error("obstacle {index} straddles the arena boundary")]
    ObstacleCrossesBoundary { index: usize },

    #[error("obstacles {first} and {second} overlap")]
    ObstacleOverlap { first: usize, second: usize },

    #[error("no map loaded")]
    EmptyScene,

    #[error("light position ({x}, {y}) is not finite")]
    InvalidLight { x: f64, y: f64 },

    #[error("light position ({x}, {y}) is outside the arena")]
    LightOutsideArena { x: f64, y: f64 },

    // Every sample direction must hit the boundary ring.
    #[error("ray at angle {angle} hit no segment")]
    UnboundedRay { angle: f64 },
}

pub type SightResult<T> = Result<T, SightError>;
