use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::simulation::{GpuParticle, ParticleCloud, RenderParams, SimParams};

/// Tracks which of two slots is read this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PingPong {
    read_from_a: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

impl Default for PingPong {
    fn default() -> Self {
        Self { read_from_a: true }
    }
}

impl PingPong {
    /// (input, output) for the next compute pass
    pub fn io(&self) -> (Slot, Slot) {
        if self.read_from_a {
            (Slot::A, Slot::B)
        } else {
            (Slot::B, Slot::A)
        }
    }

    /// Slot holding the newest state
    pub fn current(&self) -> Slot {
        self.io().0
    }

    /// Swap after a compute pass; the output becomes the next input
    pub fn swap(&mut self) {
        self.read_from_a = !self.read_from_a;
    }
}

/// Manages ping-pong particle buffers plus the static mass/rest points
pub struct ParticleBuffers {
    /// Particle buffer A - ping
    pub buffer_a: Buffer,
    /// Particle buffer B - pong
    pub buffer_b: Buffer,
    /// Logo attractor per particle
    pub mass_buffer: Buffer,
    /// Scatter rest point per particle
    pub rest_buffer: Buffer,
    /// Uniform buffer for simulation parameters
    pub params_buffer: Buffer,
    /// Uniform buffer for render parameters
    pub render_params_buffer: Buffer,
    ping_pong: PingPong,
    /// Particle count (same for all three arrays)
    pub count: u32,
}

impl ParticleBuffers {
    /// Create buffers and upload the initial cloud
    pub fn new(device: &Device, queue: &Queue, cloud: &ParticleCloud) -> Self {
        let count = cloud.len() as u32;
        let particle_size = (cloud.len() * std::mem::size_of::<GpuParticle>()) as u64;
        let point_size = (cloud.len() * std::mem::size_of::<[f32; 2]>()) as u64;

        let particle_buffer = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: particle_size,
                usage: BufferUsages::STORAGE | BufferUsages::VERTEX | BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let point_buffer = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: point_size,
                usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };

        let buffer_a = particle_buffer("particle-buffer-a");
        let buffer_b = particle_buffer("particle-buffer-b");
        let mass_buffer = point_buffer("mass-buffer");
        let rest_buffer = point_buffer("rest-buffer");

        let params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sim-params-buffer"),
            size: std::mem::size_of::<SimParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let render_params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("render-params-buffer"),
            size: std::mem::size_of::<RenderParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        queue.write_buffer(&mass_buffer, 0, bytemuck::cast_slice(&cloud.masses));
        queue.write_buffer(&rest_buffer, 0, bytemuck::cast_slice(&cloud.rests));

        let mut buffers = Self {
            buffer_a,
            buffer_b,
            mass_buffer,
            rest_buffer,
            params_buffer,
            render_params_buffer,
            ping_pong: PingPong::default(),
            count,
        };
        buffers.reset(queue, cloud);
        buffers
    }

    /// Put every particle back on its rest point with zero velocity
    pub fn reset(&mut self, queue: &Queue, cloud: &ParticleCloud) {
        let data = bytemuck::cast_slice(&cloud.particles);
        queue.write_buffer(&self.buffer_a, 0, data);
        queue.write_buffer(&self.buffer_b, 0, data);
        self.ping_pong = PingPong::default();
    }

    fn slot(&self, slot: Slot) -> &Buffer {
        match slot {
            Slot::A => &self.buffer_a,
            Slot::B => &self.buffer_b,
        }
    }

    /// Get (input_buffer, output_buffer) for current frame
    pub fn io_buffers(&self) -> (&Buffer, &Buffer) {
        let (input, output) = self.ping_pong.io();
        (self.slot(input), self.slot(output))
    }

    /// Buffer holding the newest particle state (call after `swap`)
    pub fn render_buffer(&self) -> &Buffer {
        self.slot(self.ping_pong.current())
    }

    /// Swap buffers after compute pass
    pub fn swap(&mut self) {
        self.ping_pong.swap();
    }

    pub fn update_params(&self, queue: &Queue, params: &SimParams) {
        queue.write_buffer(&self.params_buffer, 0, bytemuck::bytes_of(params));
    }

    pub fn update_render_params(&self, queue: &Queue, params: &RenderParams) {
        queue.write_buffer(&self.render_params_buffer, 0, bytemuck::bytes_of(params));
    }
}
