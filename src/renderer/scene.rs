//! Card, proposal dialog and kiss overlay

use crate::theme::Theme;
use crate::ui::{Rect, UiNode, UiTree};
use femtovg::{Align, Baseline, Canvas, Color, FontId, Paint, Path, renderer::OpenGl};
use proposal_card::config::layout;
use proposal_card::experience::Experience;

use super::particles::heart_path;

fn rgb(c: (f32, f32, f32)) -> Color {
    Color::rgbf(c.0, c.1, c.2)
}

fn rgba(c: (f32, f32, f32), alpha: f32) -> Color {
    Color::rgbaf(c.0, c.1, c.2, alpha)
}

pub struct SceneRenderer<'a> {
    canvas: &'a mut Canvas<OpenGl>,
    fonts: &'a [FontId],
    theme: &'a Theme,
    width: f32,
    height: f32,
    scale: f32,
}

impl<'a> SceneRenderer<'a> {
    pub fn new(
        canvas: &'a mut Canvas<OpenGl>,
        fonts: &'a [FontId],
        theme: &'a Theme,
        width: f32,
        height: f32,
        scale: f32,
    ) -> Self {
        Self {
            canvas,
            fonts,
            theme,
            width,
            height,
            scale,
        }
    }

    pub fn draw_background(&mut self) {
        let mut path = Path::new();
        path.rect(0.0, 0.0, self.width, self.height);
        let paint = Paint::linear_gradient(
            0.0,
            0.0,
            0.0,
            self.height,
            rgb(self.theme.bg_top),
            rgb(self.theme.bg_bottom),
        );
        self.canvas.fill_path(&path, &paint);
    }

    pub fn draw_card(&mut self, tree: &UiTree, experience: &Experience, hovered: UiNode) {
        let ui = experience.ui();
        let settings = experience.settings();
        let card = &tree.card;
        let radius = layout::CORNER_RADIUS * self.scale;

        // Shadow, face, border
        let mut shadow = Path::new();
        shadow.rounded_rect(
            card.rect.x,
            card.rect.y + 8.0 * self.scale,
            card.rect.width,
            card.rect.height,
            radius,
        );
        self.canvas
            .fill_path(&shadow, &Paint::color(Color::rgbaf(0.4, 0.05, 0.15, 0.12)));

        let mut face = Path::new();
        face.rounded_rect(card.rect.x, card.rect.y, card.rect.width, card.rect.height, radius);
        self.canvas.fill_path(&face, &Paint::color(rgb(self.theme.card)));
        let mut border = Paint::color(rgb(self.theme.card_border));
        border.set_line_width(2.0 * self.scale);
        self.canvas.stroke_path(&face, &border);

        let (cx, cy) = card.rect.center();

        if !ui.card_open {
            // Closed: big heart, title, hint
            let size = card.rect.width.min(card.rect.height) * 0.35;
            self.canvas.save();
            self.canvas.translate(cx, cy - size * 0.9);
            self.canvas
                .fill_path(&heart_path(size), &Paint::color(rgb(self.theme.heart)));
            self.canvas.restore();

            self.fill_centered(&settings.card_title, cx, cy + size * 0.5, 34.0, rgb(self.theme.fg));
            self.fill_centered(
                &settings.card_hint,
                cx,
                cy + size * 0.5 + 40.0 * self.scale,
                16.0,
                rgb(self.theme.fg_muted),
            );
            return;
        }

        if !ui.message.is_empty() && ui.message_opacity > 0.0 {
            self.fill_wrapped(
                &ui.message,
                card.message,
                22.0,
                rgba(self.theme.fg, ui.message_opacity),
            );
        }

        self.draw_button(
            card.reveal_button,
            experience.reveal_label(),
            hovered == UiNode::RevealButton,
            ui.reveal_scale,
            self.theme.button_bg,
            self.theme.button_fg,
        );
    }

    pub fn draw_dialog(&mut self, tree: &UiTree, experience: &Experience, hovered: UiNode) {
        let ui = experience.ui();
        let settings = experience.settings();
        let dialog = &tree.dialog;
        let radius = layout::CORNER_RADIUS * self.scale;

        let mut backdrop = Path::new();
        backdrop.rect(0.0, 0.0, self.width, self.height);
        let (r, g, b, a) = self.theme.backdrop;
        self.canvas
            .fill_path(&backdrop, &Paint::color(Color::rgbaf(r, g, b, a)));

        let mut face = Path::new();
        face.rounded_rect(
            dialog.rect.x,
            dialog.rect.y,
            dialog.rect.width,
            dialog.rect.height,
            radius,
        );
        self.canvas.fill_path(&face, &Paint::color(rgb(self.theme.card)));

        let (qx, qy) = dialog.question.center();
        self.fill_centered(&settings.question, qx, qy, 28.0, rgb(self.theme.fg));

        self.draw_button(
            dialog.accept,
            &ui.accept_label,
            hovered == UiNode::AcceptButton,
            1.0,
            self.theme.button_bg,
            self.theme.button_fg,
        );

        if let Some(rect) = tree.decline_rect(experience.decline_placement()) {
            self.draw_button(
                rect,
                &settings.decline_label,
                false,
                1.0,
                self.theme.decline_bg,
                self.theme.decline_fg,
            );
        }
    }

    pub fn draw_kiss(&mut self, caption: &str) {
        let mut veil = Path::new();
        veil.rect(0.0, 0.0, self.width, self.height);
        self.canvas
            .fill_path(&veil, &Paint::color(Color::rgbaf(1.0, 0.95, 0.96, 0.6)));

        let size = self.width.min(self.height) * 0.4;
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        self.canvas.save();
        self.canvas.translate(cx, cy - size * 0.6);
        self.canvas
            .fill_path(&heart_path(size), &Paint::color(rgb(self.theme.heart)));
        self.canvas.restore();

        self.fill_centered(caption, cx, cy - size * 0.1, 48.0, rgb(self.theme.button_fg));
    }

    fn draw_button(
        &mut self,
        rect: Rect,
        label: &str,
        hovered: bool,
        press: f32,
        bg: (f32, f32, f32),
        fg: (f32, f32, f32),
    ) {
        let (cx, cy) = rect.center();
        let (width, height) = (rect.width * press, rect.height * press);

        let color = if hovered { self.theme.button_hover } else { bg };
        let mut path = Path::new();
        path.rounded_rect(cx - width / 2.0, cy - height / 2.0, width, height, height / 2.0);
        self.canvas.fill_path(&path, &Paint::color(rgb(color)));

        self.fill_centered(label, cx, cy, 17.0 * press, rgb(fg));
    }

    fn text_paint(&self, size: f32, color: Color) -> Paint {
        let mut paint = Paint::color(color);
        paint.set_font(self.fonts);
        paint.set_font_size(size * self.scale);
        paint.set_text_align(Align::Center);
        paint.set_text_baseline(Baseline::Middle);
        paint
    }

    fn fill_centered(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        let paint = self.text_paint(size, color);
        let _ = self.canvas.fill_text(x.round(), y.round(), text, &paint);
    }

    /// Word-wrapped text centered in `rect`
    fn fill_wrapped(&mut self, text: &str, rect: Rect, size: f32, color: Color) {
        let paint = self.text_paint(size, color);
        let Ok(lines) = self.canvas.break_text_vec(rect.width, text, &paint) else {
            return;
        };
        let line_height = size * 1.4 * self.scale;
        let (cx, cy) = rect.center();
        let top = cy - line_height * (lines.len() as f32 - 1.0) / 2.0;

        for (i, range) in lines.into_iter().enumerate() {
            let y = top + i as f32 * line_height;
            let _ = self
                .canvas
                .fill_text(cx.round(), y.round(), &text[range], &paint);
        }
    }
}
