//! Application state and coordination

mod mouse;
mod pointer;
mod state;

use proposal_card::audio;
use proposal_card::experience::Experience;
use proposal_card::settings;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

use crate::renderer::Renderer;
use crate::ui::UiTree;

pub use state::AppResult;
use state::PointerState;

pub struct App {
    renderer: Renderer,
    experience: Experience,
    ui_tree: UiTree,
    state: PointerState,
}

impl App {
    pub fn new(
        gl_renderer: femtovg::renderer::OpenGl,
        width: f32,
        height: f32,
        scale: f32,
    ) -> Self {
        let renderer = Renderer::new(gl_renderer, width, height, scale);
        let settings = settings::load_settings();
        let music = audio::open_music(settings.music_path.clone());
        let experience = Experience::new(
            settings,
            music,
            StdRng::from_entropy(),
            width,
            height,
            scale,
        );

        Self {
            renderer,
            experience,
            ui_tree: UiTree::new(width, height, scale),
            state: PointerState::new(),
        }
    }

    // =========================================================================
    // Core lifecycle
    // =========================================================================

    /// Advance the experience by the wall time since the last tick
    pub fn tick(&mut self) -> AppResult {
        let elapsed = self.state.last_tick.elapsed();
        self.state.last_tick += elapsed;
        self.experience.advance(elapsed);
        AppResult::Redraw
    }

    /// Deadline for the next `tick`, used to pace the event loop
    pub fn next_frame(&self) -> Instant {
        self.state.next_frame()
    }

    pub fn resize(&mut self, width: f32, height: f32, scale: f32) {
        self.renderer.resize(width, height, scale);
        self.experience.resize(width, height, scale);
        self.ui_tree = UiTree::new(width, height, scale);
        tracing::debug!("resized to {width}x{height} @ {scale}");
    }

    pub fn render(&mut self) {
        self.renderer
            .render(&self.experience, &self.ui_tree, self.state.hovered);
    }
}
