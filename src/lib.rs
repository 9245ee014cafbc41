// src/lib.rs

pub mod arena;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod mesh;
pub mod polar;
pub mod scene;
pub mod vertex; // Plain bytemuck types; the GPU layout lives with the viewer's renderer
pub mod visibility;

pub use config::SightConfig;
pub use error::{SightError, SightResult};
pub use geometry::{Obstacle, Point};
pub use mesh::{RayHit, VisibilityMesh};
pub use visibility::Sight;
