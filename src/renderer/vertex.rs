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

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.07, 0.01, 0.75, 1.0];
    pub const OCEAN_DEEP: [f32; 4] = [0.1, 0.4, 0.8, 1.0];
    pub const OCEAN_SURFACE: [f32; 4] = [0.05, 0.2, 0.5, 1.0];
    /// Back to front
    pub const WAVES: [[f32; 4]; 3] = [
        [0.15, 0.45, 0.75, 0.6],
        [0.2, 0.55, 0.85, 0.7],
        [0.25, 0.65, 0.95, 0.9],
    ];
    pub const PLAYER: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
    pub const RED_FISH: [f32; 4] = [1.0, 0.3, 0.3, 1.0];
    pub const YELLOW_FISH: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
    pub const EYE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PUPIL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PANEL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Tail tint derived from the body color
    pub fn tail(body: [f32; 4]) -> [f32; 4] {
        [body[0] * 0.3, body[1] * 0.8, body[2] * 0.3, body[3]]
    }
}
