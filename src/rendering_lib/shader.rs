// src/rendering_lib/shader.rs

pub const WGSL_SHADER_SOURCE: &str = r#"
struct Light {
    position: vec2<f32>,
    padding: vec2<f32>,
}

@group(0) @binding(0)
var<uniform> light: Light;

struct VertexInput {
    @location(0) position: vec2<f32>, // Already in NDC
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) ndc: vec2<f32>,
}

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(model.position, 0.0, 1.0);
    out.ndc = model.position;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Linear falloff, fully dark about one and a half units from the light.
    let d = distance(in.ndc, light.position);
    let intensity = clamp(1.0 - d / 1.5, 0.0, 1.0);
    return vec4<f32>(intensity, intensity, intensity * 0.8, 1.0);
}
"#;
