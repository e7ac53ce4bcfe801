mod buffers;
mod compute;
mod context;
mod render;

pub use buffers::ParticleBuffers;
pub use compute::ComputePipeline;
pub use context::GpuContext;
pub use render::RenderPipeline;
