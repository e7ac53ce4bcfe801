mod app;
mod config;
mod error;
mod gpu;
mod logo;
mod simulation;

use std::io::Read;

use image::RgbaImage;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;
use crate::config::{BUILTIN_LOGO_SIZE, DEFAULT_PARTICLE_COUNT};
use crate::error::{AppError, LogoError};
use crate::logo::{builtin_logo, decode_logo, load_logo, sample_logo, SamplerSettings};
use crate::simulation::{ParticleCloud, ScatterSettings};

/// Logo source: a file path, `-` for stdin, or nothing for the built-in mark
fn read_logo(arg: Option<String>) -> Result<RgbaImage, LogoError> {
    match arg.as_deref() {
        None => {
            log::info!("No logo given, using built-in logo");
            Ok(builtin_logo(BUILTIN_LOGO_SIZE))
        }
        Some("-") => {
            log::info!("Reading logo from stdin");
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            decode_logo(&bytes)
        }
        Some(path) => {
            log::info!("Loading logo from {}", path);
            load_logo(path)
        }
    }
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let image = read_logo(std::env::args().nth(1))?;
    let sample = sample_logo(&image, &SamplerSettings::default())?;
    log::info!(
        "Sampled {}x{} logo: {} candidates ({} border)",
        sample.width,
        sample.height,
        sample.candidates.len(),
        sample.border_count()
    );

    let cloud = ParticleCloud::from_sample(
        &sample,
        DEFAULT_PARTICLE_COUNT,
        &ScatterSettings::default(),
        &mut rand::thread_rng(),
    )?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(cloud);
    event_loop.run_app(&mut app)?;

    match app.take_failure() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
