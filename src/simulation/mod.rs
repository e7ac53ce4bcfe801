mod cloud;
mod hover;
mod params;
mod particle;
#[cfg(test)]
mod reference;

pub use cloud::{ParticleCloud, ScatterSettings};
pub use hover::HoverBlend;
pub use params::{ForceParams, FrameUniforms, RenderParams, SimParams, Tunable};
pub use particle::GpuParticle;
