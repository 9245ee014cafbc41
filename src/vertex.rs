// src/vertex.rs

use bytemuck::{Pod, Zeroable};

/// GPU-side vertex of the light fan.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

/// Uniform block for the fragment shader's light falloff.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct LightUniform {
    pub position: [f32; 2],
    pub _padding: [f32; 2],
}

impl LightUniform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: [x, y],
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_cast_to_tightly_packed_floats() {
        let vertices = [Vertex::new(0.5, -0.5), Vertex::new(0.25, 1.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, &[0.5, -0.5, 0.25, 1.0]);
    }

    #[test]
    fn light_uniform_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 16);
        let uniform = LightUniform::new(1.0, 2.0);
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 16);
    }
}
