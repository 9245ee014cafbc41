// src/config.rs

/// Offset added to a corner direction to sample just either side of it.
/// Sized for the unit-square coordinate range; scale it with the arena.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Distance under which two ray hits are the same vertex, and |sin| of the
/// turn under which three hits are treated as collinear.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SightConfig {
    pub epsilon: f64,
    pub merge_tolerance: f64,
    pub compact_rays: bool,
}

impl Default for SightConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
            compact_rays: true,
        }
    }
}

impl SightConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_merge_tolerance(mut self, merge_tolerance: f64) -> Self {
        self.merge_tolerance = merge_tolerance;
        self
    }

    // Raw sweep output: every sample, duplicates and all.
    pub fn with_compaction(mut self, compact_rays: bool) -> Self {
        self.compact_rays = compact_rays;
        self
    }
}
