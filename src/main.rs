//! Interactive Particle Field
//!
//! A full-window lattice of glowing points that scatter away from the cursor
//! and spring back to rest.

mod host;

use anyhow::Context;
use host::WinitHost;
use particle_renderer::FieldRenderer;
use particle_simulation::{FieldParams, FieldView, ListenerKind};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Environment variable naming a JSON file with [`FieldParams`] overrides
const CONFIG_ENV: &str = "PARTICLE_FIELD_CONFIG";

fn load_params() -> FieldParams {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return FieldParams::default();
    };

    match FieldParams::load(&path) {
        Ok(params) => {
            log::info!("✓ Loaded field parameters from {}", path);
            params
        }
        Err(e) => {
            log::warn!("Could not load {} ({:#}), using defaults", path, e);
            FieldParams::default()
        }
    }
}

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scale_factor: f64,

    renderer: FieldRenderer,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("creating window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("requesting adapter")?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("requesting device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // One update per display refresh.
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = FieldRenderer::new(&device, config.format);
        log::info!("✓ Renderer initialized");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scale_factor: window.scale_factor(),
            renderer,
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
        })
    }

    /// Surface size in logical pixels, the space particles live in
    fn logical_size(&self) -> (f32, f32) {
        (
            (self.config.width as f64 / self.scale_factor) as f32,
            (self.config.height as f64 / self.scale_factor) as f32,
        )
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) {
        self.scale_factor = scale_factor;
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw the field; returns (fps, average frame time in ms)
    fn render(
        &mut self,
        view: &FieldView,
    ) -> Result<(f32, f32), wgpu::SurfaceError> {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }
        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = 1000.0 / avg_frame_time.max(f32::EPSILON);

        let output = self.surface.get_current_texture()?;
        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let viewport = self.logical_size();
        self.renderer.render(
            &self.device,
            &self.queue,
            &target,
            view.particles(),
            viewport,
            view.field().params().layer_opacity,
        );

        output.present();
        Ok((fps, avg_frame_time))
    }
}

struct App {
    params: FieldParams,
    window: Option<Arc<Window>>,
    host: Option<WinitHost>,
    gpu_state: Option<GpuState>,
    view: Option<FieldView>,
}

impl App {
    fn new(params: FieldParams) -> Self {
        Self {
            params,
            window: None,
            host: None,
            gpu_state: None,
            view: None,
        }
    }

    /// Stop the frame loop and drop every listener
    fn unmount(&mut self) {
        if let (Some(view), Some(host)) = (self.view.take(), &mut self.host) {
            view.unmount(host);
            log::debug!(
                "after unmount: {} scheduled frames, {} listeners",
                host.scheduled_frames(),
                host.listener_count()
            );
        }
    }

    fn logical(&self, position: winit::dpi::PhysicalPosition<f64>) -> (f32, f32) {
        let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
        let logical = position.to_logical::<f64>(scale);
        (logical.x as f32, logical.y as f32)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Particle Field")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let gpu_state = match pollster::block_on(GpuState::new(window.clone())) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("Drawing surface unavailable: {:#}", e);
                None
            }
        };

        let mut host = WinitHost::new(window.clone());
        let viewport = gpu_state
            .as_ref()
            .map_or((0.0, 0.0), GpuState::logical_size);
        self.view = FieldView::mount(
            &mut host,
            gpu_state.is_some(),
            viewport,
            self.params.clone(),
        );

        self.window = Some(window);
        self.host = Some(host);
        self.gpu_state = gpu_state;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.unmount();
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size, scale);
                }

                let listening = self
                    .host
                    .as_ref()
                    .is_some_and(|h| h.is_listening(ListenerKind::Resize));
                if let (true, Some(view)) = (listening, &mut self.view) {
                    let logical = physical_size.to_logical::<f64>(scale);
                    view.on_resize(logical.width as f32, logical.height as f32, Instant::now());
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.logical(position);
                let listening = self
                    .host
                    .as_ref()
                    .is_some_and(|h| h.is_listening(ListenerKind::PointerMove));
                if let (true, Some(view)) = (listening, &mut self.view) {
                    view.on_pointer_move(x, y);
                }
            }

            WindowEvent::CursorLeft { .. } => {
                let listening = self
                    .host
                    .as_ref()
                    .is_some_and(|h| h.is_listening(ListenerKind::PointerLeave));
                if let (true, Some(view)) = (listening, &mut self.view) {
                    view.on_pointer_leave();
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(host), Some(gpu_state), Some(view)) = (
                    &self.window,
                    &mut self.host,
                    &mut self.gpu_state,
                    &mut self.view,
                ) else {
                    return;
                };

                let Some(handle) = host.take_frame() else {
                    return;
                };
                if !view.on_frame(handle, Instant::now(), host) {
                    return;
                }

                let mut out_of_memory = false;

                match gpu_state.render(view) {
                    Ok((fps, frame_time)) => {
                        window.set_title(&format!(
                            "Particle Field - {:.0} FPS ({:.2}ms) - {} particles",
                            fps,
                            frame_time,
                            view.particles().len()
                        ));
                    }
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu_state.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Surface out of memory, exiting");
                        out_of_memory = true;
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }

                if out_of_memory {
                    self.unmount();
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting particle field...");

    let params = load_params();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(params);
    event_loop.run_app(&mut app)?;
    Ok(())
}
