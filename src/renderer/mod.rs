//! GPU-accelerated rendering with femtovg

mod fonts;
mod particles;
mod scene;

use crate::theme::Theme;
use crate::ui::{UiNode, UiTree};
use femtovg::{Canvas, FontId, renderer::OpenGl};
use proposal_card::experience::Experience;

use scene::SceneRenderer;

pub struct Renderer {
    canvas: Canvas<OpenGl>,
    fonts: Vec<FontId>,
    theme: Theme,
    width: f32,
    height: f32,
    scale: f32,
}

impl Renderer {
    pub fn new(renderer: OpenGl, width: f32, height: f32, scale: f32) -> Self {
        let mut canvas = Canvas::new(renderer).expect("Failed to create canvas");
        let fonts = fonts::load_fonts(&mut canvas);

        Self {
            canvas,
            fonts,
            theme: Theme::rose(),
            width,
            height,
            scale,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, scale: f32) {
        self.width = width;
        self.height = height;
        self.scale = scale;
    }

    /// Draw one frame. The particle layer sits behind the card unless the
    /// experience has raised it for the curtain.
    pub fn render(&mut self, experience: &Experience, tree: &UiTree, hovered: UiNode) {
        let (width, height) = (self.width, self.height);
        let ui = experience.ui();
        let field = experience.field();

        self.canvas.set_size(width as u32, height as u32, 1.0);
        self.canvas
            .clear_rect(0, 0, width as u32, height as u32, femtovg::Color::white());

        {
            let mut scene = SceneRenderer::new(
                &mut self.canvas,
                &self.fonts,
                &self.theme,
                width,
                height,
                self.scale,
            );
            scene.draw_background();
        }

        if !ui.canvas_raised {
            particles::draw_ambient(&mut self.canvas, field);
            particles::draw_hearts(&mut self.canvas, field, &self.theme);
        }

        {
            let mut scene = SceneRenderer::new(
                &mut self.canvas,
                &self.fonts,
                &self.theme,
                width,
                height,
                self.scale,
            );
            scene.draw_card(tree, experience, hovered);
            if ui.dialog_visible {
                scene.draw_dialog(tree, experience, hovered);
            }
        }

        if ui.canvas_raised {
            particles::draw_ambient(&mut self.canvas, field);
            particles::draw_hearts(&mut self.canvas, field, &self.theme);
        }

        if ui.kiss_visible {
            let mut scene = SceneRenderer::new(
                &mut self.canvas,
                &self.fonts,
                &self.theme,
                width,
                height,
                self.scale,
            );
            scene.draw_kiss(&experience.settings().kiss_caption);
        }

        particles::draw_sparkles(&mut self.canvas, field, &self.theme, self.scale);

        self.canvas.flush();
    }
}
