//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (night sky palette)
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.12, 0.11, 0.29, 1.0]; // indigo
    pub const SKY_BOTTOM: [f32; 4] = [0.23, 0.03, 0.39, 1.0]; // purple
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PIPE_LIGHT: [f32; 4] = [0.09, 0.64, 0.29, 1.0];
    pub const PIPE_DARK: [f32; 4] = [0.08, 0.33, 0.18, 1.0];
    pub const BIRD_YELLOW: [f32; 4] = [0.98, 0.8, 0.08, 1.0];
    pub const BIRD_ORANGE: [f32; 4] = [0.98, 0.45, 0.09, 1.0];
    pub const EYE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PUPIL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.75];
    pub const BACKGROUND: [f32; 4] = [0.07, 0.09, 0.15, 1.0];
}
