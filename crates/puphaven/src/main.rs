//! PupHaven - Puppy Adoption Showcase
//!
//! This is the main application crate for PupHaven.

#![warn(missing_docs)]

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{anyhow, Context as _, Result};
use crossbeam_channel::Receiver;
use egui_wgpu::Renderer;
use egui_winit::State;
use puphaven_core::{AppSettings, NavState, PuppyId, Roster, Screen};
use puphaven_ui::{AssetCache, DetailView, HomeView, Theme, ThemeConfig, UIAction};
use tracing::{debug, error, info, warn};
use winit::{event::WindowEvent, event_loop::EventLoop};

/// The main application state.
struct App {
    /// The main window.
    window: Arc<winit::window::Window>,
    /// The wgpu surface for the main window.
    surface: wgpu::Surface<'static>,
    /// The configuration for the wgpu surface.
    surface_config: wgpu::SurfaceConfiguration,
    /// The wgpu device.
    device: wgpu::Device,
    /// The wgpu queue.
    queue: wgpu::Queue,
    /// The egui context.
    egui_context: egui::Context,
    /// The egui state.
    egui_state: State,
    /// The egui renderer.
    egui_renderer: Renderer,
    /// Which screen is showing.
    nav: NavState,
    /// Feed of accepted navigation transitions, drained for logging.
    nav_feed: Receiver<Screen>,
    /// The adoptable puppies.
    roster: Roster,
    /// Portrait textures and their accent colors.
    assets: AssetCache,
    /// The home screen.
    home: HomeView,
    /// The detail screen.
    detail: DetailView,
    /// Ids the user has adopted this session.
    adopted: HashSet<PuppyId>,
    /// The theme configuration.
    theme: ThemeConfig,
    /// UI actions collected during the frame.
    actions: Vec<UIAction>,
}

impl App {
    /// Creates a new `App`.
    pub async fn new(elwt: &winit::event_loop::ActiveEventLoop) -> Result<Self> {
        let settings = load_settings();

        // GL eagerly initializes EGL and can panic on headless systems.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all() & !wgpu::Backends::GL,
            ..Default::default()
        });

        let attributes = winit::window::Window::default_attributes()
            .with_title(settings.window_title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                settings.window_width,
                settings.window_height,
            ));
        let window = Arc::new(
            elwt.create_window(attributes)
                .context("Failed to create window")?,
        );

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("No compatible adapter found: {}", e))?;

        let adapter_info = adapter.get_info();
        info!(
            "Selected adapter: {} ({:?})",
            adapter_info.name, adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("PupHaven Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                ..Default::default()
            })
            .await
            .context("Failed to create device")?;

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8Unorm,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // Initialize egui
        let egui_context = egui::Context::default();
        let egui_state = State::new(
            egui_context.clone(),
            egui::viewport::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );
        let egui_renderer = Renderer::new(
            &device,
            surface_config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let theme = ThemeConfig {
            theme: if settings.dark_mode {
                Theme::Dark
            } else {
                Theme::Light
            },
            ui_scale: settings.ui_scale,
        };
        theme.apply(&egui_context);

        let roster = Roster::demo().context("Demo roster failed to load")?;
        info!("Loaded {} adoptable puppies", roster.len());

        let mut nav = NavState::new();
        let nav_feed = nav.subscribe();

        Ok(Self {
            window,
            surface,
            surface_config,
            device,
            queue,
            egui_context,
            egui_state,
            egui_renderer,
            nav,
            nav_feed,
            roster,
            assets: AssetCache::new(settings.portrait_size),
            home: HomeView::new(),
            detail: DetailView::new(),
            adopted: HashSet::new(),
            theme,
            actions: Vec::new(),
        })
    }

    /// Handles a window event.
    pub fn handle_event(
        &mut self,
        event: winit::event::Event<()>,
        elwt: &winit::event_loop::ActiveEventLoop,
    ) -> Result<()> {
        match &event {
            winit::event::Event::WindowEvent { event, window_id } => {
                if *window_id != self.window.id() {
                    return Ok(());
                }
                let response = self.egui_state.on_window_event(&self.window, event);

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::Resized(size) => {
                        if size.width > 0 && size.height > 0 {
                            self.surface_config.width = size.width;
                            self.surface_config.height = size.height;
                            self.surface.configure(&self.device, &self.surface_config);
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        let pressed = event.state == winit::event::ElementState::Pressed;
                        if pressed && !event.repeat && !response.consumed {
                            if let winit::keyboard::Key::Named(key) = &event.logical_key {
                                match key {
                                    winit::keyboard::NamedKey::Escape
                                    | winit::keyboard::NamedKey::BrowserBack
                                    | winit::keyboard::NamedKey::GoBack => {
                                        self.back_pressed(elwt);
                                    }
                                    _ => {}
                                }
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = self.render() {
                            error!("Render error: {}", e);
                        }
                    }
                    _ => (),
                }
            }
            winit::event::Event::AboutToWait => {
                self.window.request_redraw();
            }
            winit::event::Event::LoopExiting => {
                info!("Session ended");
            }
            _ => (),
        }
        Ok(())
    }

    /// System back: leave the detail screen, or quit from the home screen.
    fn back_pressed(&mut self, elwt: &winit::event_loop::ActiveEventLoop) {
        if !self.nav.go_back() {
            info!("Back pressed on the home screen, exiting");
            elwt.exit();
        }
    }

    /// Renders one frame.
    fn render(&mut self) -> Result<()> {
        self.drain_nav_feed();

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_context.run(raw_input, |ctx| {
            self.theme.apply(ctx);
            egui::CentralPanel::default().show(ctx, |ui| match self.nav.current() {
                Screen::Home => {
                    self.home.show(
                        ui,
                        &self.roster,
                        &mut self.assets,
                        &self.theme,
                        &mut self.actions,
                    );
                }
                Screen::Detail(puppy) => {
                    self.detail.show(
                        ui,
                        &puppy,
                        &self.adopted,
                        &mut self.assets,
                        &self.theme,
                        &mut self.actions,
                    );
                }
            });
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);
        self.apply_actions();

        let tris = self
            .egui_context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Egui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(clear_color(&self.theme)),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        self.queue.submit(Some(encoder.finish()));
        surface_texture.present();

        Ok(())
    }

    /// Applies the actions the views emitted during the frame.
    fn apply_actions(&mut self) {
        for action in std::mem::take(&mut self.actions) {
            match action {
                UIAction::OpenPuppy(id) => match self.roster.get(id) {
                    Some(puppy) => self.nav.navigate_to_detail(puppy.clone()),
                    None => warn!(id, "Unknown puppy id"),
                },
                UIAction::GoBack => {
                    // The in-app back arrow only renders on the detail screen.
                    let _ = self.nav.go_back();
                }
                UIAction::ToggleAdopt(id) => {
                    if self.adopted.insert(id) {
                        info!(id, "Puppy adopted");
                    } else {
                        self.adopted.remove(&id);
                        info!(id, "Adoption cancelled");
                    }
                }
            }
        }
    }

    fn drain_nav_feed(&mut self) {
        while let Ok(screen) = self.nav_feed.try_recv() {
            match screen {
                Screen::Home => debug!("Showing the home grid"),
                Screen::Detail(puppy) => {
                    debug!(name = %puppy.name, "Showing a puppy profile");
                }
            }
        }
    }
}

/// Read settings from `puphaven.ron` in the working directory, falling back
/// to the defaults when the file is missing or malformed.
fn load_settings() -> AppSettings {
    let path = std::path::Path::new("puphaven.ron");
    match std::fs::read_to_string(path) {
        Ok(text) => match ron::from_str(&text) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                AppSettings::default()
            }
        },
        Err(_) => AppSettings::default(),
    }
}

fn clear_color(theme: &ThemeConfig) -> wgpu::Color {
    let [r, g, b, _] = theme.background().to_array();
    wgpu::Color {
        r: f64::from(r) / 255.0,
        g: f64::from(g) / 255.0,
        b: f64::from(b) / 255.0,
        a: 1.0,
    }
}

mod logging_setup;

/// The main entry point for the application.
fn main() -> Result<()> {
    logging_setup::init()?;

    info!("==========================================");
    info!("===     PupHaven Session Started       ===");
    info!("==========================================");

    // Start the application loop
    let event_loop = EventLoop::new()?;
    let mut app: Option<App> = None;

    #[allow(deprecated)]
    event_loop.run(move |event, elwt| {
        if app.is_none() {
            match pollster::block_on(App::new(elwt)) {
                Ok(created) => {
                    app = Some(created);
                    info!("--- Entering Main Event Loop ---");
                }
                Err(e) => {
                    error!("Failed to start: {:#}", e);
                    elwt.exit();
                    return;
                }
            }
        }

        if let Some(app_ref) = &mut app {
            if let Err(e) = app_ref.handle_event(event, elwt) {
                error!("Application error: {}", e);
                elwt.exit();
            }
        }
    })?;

    Ok(())
}
