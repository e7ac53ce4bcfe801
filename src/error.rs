use thiserror::Error;

/// Failures while turning a bitmap into a point cloud
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to read logo: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode logo image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("logo has no pixels with alpha >= {threshold}")]
    EmptyMask { threshold: u8 },

    #[error("particle count must be greater than zero")]
    NoParticles,

    #[error("invalid candidate weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),
}

/// Failures of the one-shot GPU capability check
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("no compatible GPU adapter available (WebGPU unsupported?)")]
    NoAdapter,

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface not supported by adapter")]
    UnsupportedSurface,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Logo(#[from] LogoError),

    #[error(transparent)]
    Gpu(#[from] GpuError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
