//! Proposal Card - an animated marriage proposal in a window
//!
//! Click the card, read the reasons, answer the question.

mod app;
mod renderer;
mod theme;
mod ui;

use app::App;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use std::ffi::CString;
use std::num::NonZeroU32;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window, WindowAttributes, WindowId};

/// Use `RUST_LOG` to override the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = AppHandler::new();
    event_loop.run_app(&mut handler).expect("Event loop failed");
}

struct AppHandler {
    state: Option<AppState>,
    mouse_position: (f64, f64),
    cursor: CursorIcon,
}

struct AppState {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    app: App,
}

impl AppHandler {
    fn new() -> Self {
        Self {
            state: None,
            mouse_position: (0.0, 0.0),
            cursor: CursorIcon::Default,
        }
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Для тебе ❤")
            .with_inner_size(LogicalSize::new(1000.0, 800.0));

        // OpenGL config with 4x MSAA for smooth hearts
        let config_template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_multisampling(4);

        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

        let (window, gl_config) = display_builder
            .build(event_loop, config_template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .expect("No GL configs found")
            })
            .expect("Failed to create window");

        let window = window.expect("Window not created");
        let gl_display = gl_config.display();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(None))
            .build(Some(
                window
                    .window_handle()
                    .expect("Failed to get window handle")
                    .as_raw(),
            ));

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attrs)
                .expect("Failed to create GL context")
        };

        let size = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window
                .window_handle()
                .expect("Failed to get window handle")
                .as_raw(),
            NonZeroU32::new(size.width.max(1)).expect("width is at least 1"),
            NonZeroU32::new(size.height.max(1)).expect("height is at least 1"),
        );

        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &surface_attrs)
                .expect("Failed to create surface")
        };

        let gl_context = gl_context
            .make_current(&gl_surface)
            .expect("Failed to make context current");

        // Present at the display rate instead of spinning
        if let Err(err) =
            gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            tracing::warn!("vsync unavailable: {err}");
        }

        let renderer = unsafe {
            femtovg::renderer::OpenGl::new_from_function_cstr(|name| {
                let cstr = CString::new(name.to_bytes()).expect("GL symbol names have no NUL");
                gl_display.get_proc_address(&cstr) as *const _
            })
            .expect("Failed to create renderer")
        };

        let scale = window.scale_factor() as f32;
        let app = App::new(renderer, size.width as f32, size.height as f32, scale);
        tracing::info!("window ready ({}x{} @ {scale})", size.width, size.height);

        self.state = Some(AppState {
            window,
            gl_context,
            gl_surface,
            app,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    state.gl_surface.resize(&state.gl_context, width, height);
                    let scale = state.window.scale_factor() as f32;
                    state
                        .app
                        .resize(size.width as f32, size.height as f32, scale);
                    state.window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = (position.x, position.y);
                if state
                    .app
                    .handle_mouse_move(position.x as f32, position.y as f32)
                    .needs_redraw()
                {
                    state.window.request_redraw();
                }

                let cursor = state.app.cursor_icon();
                if cursor != self.cursor {
                    state.window.set_cursor(cursor);
                    self.cursor = cursor;
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position;
                if state.app.click_at(x as f32, y as f32).needs_redraw() {
                    state.window.request_redraw();
                }
            }

            WindowEvent::Touch(Touch {
                phase: TouchPhase::Started,
                location,
                ..
            }) => {
                if state
                    .app
                    .touch_at(location.x as f32, location.y as f32)
                    .needs_redraw()
                {
                    state.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                state.app.render();
                if let Err(err) = state.gl_surface.swap_buffers(&state.gl_context) {
                    tracing::warn!("swap buffers failed: {err}");
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            if Instant::now() >= state.app.next_frame() && state.app.tick().needs_redraw() {
                state.window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(state.app.next_frame()));
        }
    }
}
