use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{MAX_FRAME_DT, TUNE_STEP, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::AppError;
use crate::gpu::{ComputePipeline, GpuContext, ParticleBuffers, RenderPipeline};
use crate::simulation::{ForceParams, FrameUniforms, HoverBlend, ParticleCloud, RenderParams, Tunable};

/// Everything that exists only once the GPU is up
struct Renderer {
    gpu: GpuContext,
    buffers: ParticleBuffers,
    compute: ComputePipeline,
    render: RenderPipeline,
    render_bind_group: wgpu::BindGroup,
}

/// Application state
pub struct App {
    cloud: ParticleCloud,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    failure: Option<AppError>,
    forces: ForceParams,
    selected: Tunable,
    hover: HoverBlend,
    paused: bool,
    clock: FrameClock,
    fps_counter: FpsCounter,
}

impl App {
    pub fn new(cloud: ParticleCloud) -> Self {
        Self {
            cloud,
            window: None,
            renderer: None,
            failure: None,
            forces: ForceParams::default(),
            selected: Tunable::Spring,
            hover: HoverBlend::default(),
            paused: false,
            clock: FrameClock::new(),
            fps_counter: FpsCounter::new(),
        }
    }

    /// The initialization error that stopped the event loop, if any
    pub fn take_failure(&mut self) -> Option<AppError> {
        self.failure.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title("Logo Particles - Initializing...")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        log::info!("Uploading {} particles...", self.cloud.len());
        let buffers = ParticleBuffers::new(&gpu.device, &gpu.queue, &self.cloud);
        buffers.update_render_params(&gpu.queue, &RenderParams::new(gpu.aspect()));

        log::info!("Creating compute pipeline...");
        let compute = ComputePipeline::new(&gpu.device);

        log::info!("Creating render pipeline...");
        let render = RenderPipeline::new(&gpu.device, gpu.format());
        let render_bind_group = render.create_bind_group(&gpu.device, &buffers.render_params_buffer);

        self.window = Some(window);
        self.renderer = Some(Renderer {
            gpu,
            buffers,
            compute,
            render,
            render_bind_group,
        });
        self.clock = FrameClock::new();
        Ok(())
    }

    fn render(&mut self) {
        let (dt, elapsed) = self.clock.tick(self.paused);
        let hover = self.hover.update(dt);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let gpu = &renderer.gpu;
        let aspect = gpu.aspect();

        // Get surface texture
        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        // 1. Run compute shader (force + integration step)
        if dt > 0.0 {
            let params = self.forces.uniforms(
                FrameUniforms {
                    dt,
                    hover,
                    time: elapsed,
                    aspect,
                },
                renderer.buffers.count,
            );
            renderer.buffers.update_params(&gpu.queue, &params);

            let (input_buf, output_buf) = renderer.buffers.io_buffers();
            let compute_bind_group = renderer.compute.create_bind_group(
                &gpu.device,
                input_buf,
                output_buf,
                &renderer.buffers.mass_buffer,
                &renderer.buffers.rest_buffer,
                &renderer.buffers.params_buffer,
            );
            renderer
                .compute
                .dispatch(&mut encoder, &compute_bind_group, renderer.buffers.count);

            // 2. Swap buffers (output becomes input for next frame)
            renderer.buffers.swap();
        }

        // 3. Draw the newest state
        renderer
            .buffers
            .update_render_params(&gpu.queue, &RenderParams::new(aspect));
        renderer.render.draw(
            &mut encoder,
            &view,
            &renderer.render_bind_group,
            renderer.buffers.render_buffer(),
            renderer.buffers.count,
        );

        // Submit work
        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        // Update and display FPS
        if let Some(fps) = self.fps_counter.tick() {
            if let Some(window) = &self.window {
                let state = if self.paused { " [Paused]" } else { "" };
                window.set_title(&format!(
                    "Logo Particles - {:.0} FPS - hover {:.2} - {}: {:.3}{}",
                    fps,
                    self.hover.value(),
                    self.selected.name(),
                    self.forces.get(self.selected),
                    state
                ));
            }
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        match key_code {
            // Select next force constant
            KeyCode::Tab => {
                self.selected = self.selected.next();
                log::info!(
                    "Tuning {} ({:.3})",
                    self.selected.name(),
                    self.forces.get(self.selected)
                );
            }

            // Scale selected constant
            KeyCode::ArrowUp | KeyCode::Equal => {
                let value = self.forces.scale(self.selected, TUNE_STEP);
                log::info!("{}: {:.3}", self.selected.name(), value);
            }
            KeyCode::ArrowDown | KeyCode::Minus => {
                let value = self.forces.scale(self.selected, 1.0 / TUNE_STEP);
                log::info!("{}: {:.3}", self.selected.name(), value);
            }

            // Hold the logo formed without hovering
            KeyCode::KeyH => {
                let pinned = self.hover.toggle_pinned();
                log::info!("Hover pin: {}", if pinned { "ON" } else { "OFF" });
            }

            KeyCode::Space => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }

            // Scatter everything back to rest
            KeyCode::KeyR => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.buffers.reset(&renderer.gpu.queue, &self.cloud);
                    log::info!("Particles reset");
                }
            }

            KeyCode::Backspace => {
                self.forces = ForceParams::default();
                log::info!("Forces restored to defaults");
            }

            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing logo particles...");

        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {}", e);
            self.failure = Some(e);
            event_loop.exit();
            return;
        }

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Hover window: Form logo");
        log::info!("  H: Pin hover");
        log::info!("  Tab: Select force constant");
        log::info!("  Up/Down: Adjust selected constant");
        log::info!("  Backspace: Restore default forces");
        log::info!("  Space: Pause");
        log::info!("  R: Reset particles");
        log::info!("  Escape: Quit");

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::CursorEntered { .. } => {
                self.hover.set_cursor_inside(true);
            }
            WindowEvent::CursorLeft { .. } => {
                self.hover.set_cursor_inside(false);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    renderer.gpu.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
                // Request another frame immediately
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Frame delta and simulated time. Simulated time only advances by the
/// clamped delta of unpaused frames, so the wiggle phase resumes smoothly.
struct FrameClock {
    last_frame: Instant,
    sim_time: f32,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            sim_time: 0.0,
        }
    }

    /// Returns (dt, simulated time) in seconds
    fn tick(&mut self, paused: bool) -> (f32, f32) {
        let now = Instant::now();
        let raw_dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(raw_dt, paused)
    }

    fn advance(&mut self, raw_dt: f32, paused: bool) -> (f32, f32) {
        let dt = if paused { 0.0 } else { clamp_dt(raw_dt) };
        self.sim_time += dt;
        (dt, self.sim_time)
    }
}

fn clamp_dt(dt: f32) -> f32 {
    dt.clamp(0.0, MAX_FRAME_DT)
}

/// Simple FPS counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
