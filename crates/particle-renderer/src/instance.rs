//! GPU-side particle data

use bytemuck::{Pod, Zeroable};
use particle_physics::Particle;

/// Per-instance data for one particle circle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Center in logical pixels
    pub center: [f32; 2],
    pub radius: f32,
    pub opacity: f32,
    /// Linear RGBA
    pub color: [f32; 4],
}

impl ParticleInstance {
    /// Vertex buffer layout for instance attributes
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            // center: vec2<f32> at location 1
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
            // radius: f32 at location 2
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32,
            },
            // opacity: f32 at location 3
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 2]>() + std::mem::size_of::<f32>())
                    as wgpu::BufferAddress,
                shader_location: 3,
                format: wgpu::VertexFormat::Float32,
            },
            // color: vec4<f32> at location 4
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 2]>() + std::mem::size_of::<f32>() * 2)
                    as wgpu::BufferAddress,
                shader_location: 4,
                format: wgpu::VertexFormat::Float32x4,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

impl From<&Particle> for ParticleInstance {
    fn from(particle: &Particle) -> Self {
        Self {
            center: particle.position.to_array(),
            radius: particle.size,
            opacity: particle.opacity,
            color: particle.get_color().to_array(),
        }
    }
}

/// Viewport uniform (matches `Viewport` in field.wgsl)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ViewportUniform {
    /// Logical size in pixels
    pub size: [f32; 2],
    pub layer_opacity: f32,
    pub _padding: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use particle_physics::PALETTE;

    #[test]
    fn test_layouts_match_wgsl() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
    }

    #[test]
    fn test_instance_from_particle() {
        let mut particle = Particle::new(Vec2::new(10.0, 20.0), 2.5, 2);
        particle.position = Vec2::new(12.0, 18.0);
        particle.opacity = 0.6;

        let instance = ParticleInstance::from(&particle);
        assert_eq!(instance.center, [12.0, 18.0]);
        assert_eq!(instance.radius, 2.5);
        assert_eq!(instance.opacity, 0.6);
        assert_eq!(instance.color, PALETTE[2].to_array());
    }
}
