//! Ambient background particles

use crate::config::particles;
use rand::Rng;

/// RGBA colour with channels in 0.0-1.0
pub type Rgba = (f32, f32, f32, f32);

/// Slow drifting dot behind everything
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, width: f32, height: f32, scale: f32) -> Self {
        let speed = particles::AMBIENT_MAX_SPEED * scale;
        Self {
            x: rng.gen_range(0.0..1.0) * width,
            y: rng.gen_range(0.0..1.0) * height,
            vx: rng.gen_range(-speed..speed),
            vy: rng.gen_range(-speed..speed),
            radius: rng.gen_range(0.0..particles::AMBIENT_MAX_RADIUS) * scale,
            color: (
                1.0,
                77.0 / 255.0,
                109.0 / 255.0,
                rng.gen_range(0.0..particles::AMBIENT_MAX_ALPHA),
            ),
        }
    }

    /// Move one step and wrap to the opposite edge when leaving the bounds
    pub fn step(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 {
            self.x = width;
        }
        if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
        if self.y > height {
            self.y = 0.0;
        }
    }
}
