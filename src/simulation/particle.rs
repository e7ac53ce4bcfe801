/// GPU-compatible particle.
///
/// Layout: 16 bytes, read as an instance vertex buffer by the render pass and
/// as `array<Particle>` by the compute pass.
/// - position: [f32; 2] = 8 bytes - logo-space position
/// - velocity: [f32; 2] = 8 bytes - logo-space units per second
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuParticle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
}

impl GpuParticle {
    /// A particle at rest at the given position
    pub fn at_rest(position: [f32; 2]) -> Self {
        Self {
            position,
            velocity: [0.0, 0.0],
        }
    }

    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    /// Instance-rate vertex layout for drawing one quad per particle
    pub fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuParticle>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
