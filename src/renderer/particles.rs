//! Drawing for ambient particles, hearts and sparkles

use crate::theme::Theme;
use femtovg::{Canvas, Color, Paint, Path, renderer::OpenGl};
use proposal_card::effects::{Heart, ParticleField};

/// Heart outline of height `size`, tip pointing down, top centre at the origin
pub fn heart_path(size: f32) -> Path {
    let top = size * 0.3;
    let half = size / 2.0;
    let mid = (size + top) / 2.0;

    let mut path = Path::new();
    path.move_to(0.0, top);
    path.bezier_to(0.0, 0.0, -half, 0.0, -half, top);
    path.bezier_to(-half, mid, 0.0, mid, 0.0, size);
    path.bezier_to(0.0, mid, half, mid, half, top);
    path.bezier_to(half, 0.0, 0.0, 0.0, 0.0, top);
    path.close();
    path
}

pub fn draw_ambient(canvas: &mut Canvas<OpenGl>, field: &ParticleField) {
    for particle in field.particles() {
        let (r, g, b, a) = particle.color;
        let mut path = Path::new();
        path.circle(particle.x, particle.y, particle.radius);
        canvas.fill_path(&path, &Paint::color(Color::rgbaf(r, g, b, a)));
    }
}

pub fn draw_hearts(canvas: &mut Canvas<OpenGl>, field: &ParticleField, theme: &Theme) {
    let paint = Paint::color(Color::rgbf(theme.heart.0, theme.heart.1, theme.heart.2));
    for heart in field.hearts() {
        draw_heart(canvas, heart, &paint);
    }
}

fn draw_heart(canvas: &mut Canvas<OpenGl>, heart: &Heart, paint: &Paint) {
    canvas.save();
    canvas.translate(heart.x, heart.y);
    canvas.rotate(heart.rotation.to_radians());
    canvas.set_global_alpha(heart.opacity.clamp(0.0, 1.0));
    canvas.fill_path(&heart_path(heart.size), paint);
    canvas.restore();
}

pub fn draw_sparkles(canvas: &mut Canvas<OpenGl>, field: &ParticleField, theme: &Theme, scale: f32) {
    let (r, g, b) = theme.sparkle;
    for sparkle in field.sparkles() {
        let life = sparkle.life_ratio();
        let size = (2.0 + 4.0 * life) * scale;

        // Four-point star
        let mut star = Path::new();
        star.move_to(sparkle.x, sparkle.y - size);
        star.line_to(sparkle.x + size * 0.25, sparkle.y - size * 0.25);
        star.line_to(sparkle.x + size, sparkle.y);
        star.line_to(sparkle.x + size * 0.25, sparkle.y + size * 0.25);
        star.line_to(sparkle.x, sparkle.y + size);
        star.line_to(sparkle.x - size * 0.25, sparkle.y + size * 0.25);
        star.line_to(sparkle.x - size, sparkle.y);
        star.line_to(sparkle.x - size * 0.25, sparkle.y - size * 0.25);
        star.close();
        canvas.fill_path(&star, &Paint::color(Color::rgbaf(r, g, b, life)));

        // Soft glow
        let mut glow = Path::new();
        glow.circle(sparkle.x, sparkle.y, size * 1.5);
        canvas.fill_path(&glow, &Paint::color(Color::rgbaf(r, g, b, life * 0.15)));
    }
}
