//! Heart particles for bursts, floating hearts and the curtain

use crate::config::{curtain, particles};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Heart {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub gravity: f32,
    pub opacity: f32,
    /// Degrees
    pub rotation: f32,
    pub rotation_speed: f32,
    pub size: f32,
}

impl Heart {
    /// Explosion heart: random outward velocity biased upwards, with gravity
    pub fn burst(rng: &mut impl Rng, x: f32, y: f32, scale: f32) -> Self {
        Self {
            x,
            y,
            vx: rng.gen_range(-5.0..5.0) * scale,
            vy: rng.gen_range(-15.0..-5.0) * scale,
            gravity: particles::HEART_GRAVITY * scale,
            opacity: 1.0,
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-5.0..5.0),
            size: rng.gen_range(particles::HEART_MIN_SIZE..particles::HEART_MAX_SIZE) * scale,
        }
    }

    /// Slow gravity-free heart rising from below the bottom edge
    pub fn floating(rng: &mut impl Rng, width: f32, height: f32, scale: f32) -> Self {
        let x = rng.gen_range(0.0..1.0) * width;
        let mut heart = Self::burst(rng, x, height + particles::FLOATING_SPAWN_OFFSET * scale, scale);
        heart.vy = rng.gen_range(-5.0..-2.0) * scale;
        heart.gravity = 0.0;
        heart.opacity = particles::FLOATING_OPACITY;
        heart
    }

    /// Large opaque heart falling straight down at constant speed
    pub fn curtain(rng: &mut impl Rng, width: f32, scale: f32) -> Self {
        let x = rng.gen_range(0.0..1.0) * width;
        let y = rng.gen_range(curtain::SPAWN_TOP..curtain::SPAWN_BOTTOM) * scale;
        let mut heart = Self::burst(rng, x, y, scale);
        heart.vx = 0.0;
        heart.vy = rng.gen_range(curtain::MIN_FALL_SPEED..curtain::MAX_FALL_SPEED) * scale;
        heart.gravity = 0.0;
        heart.opacity = 1.0;
        heart.size = rng.gen_range(curtain::MIN_SIZE..curtain::MAX_SIZE) * scale;
        heart
    }

    pub fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += self.gravity;
        self.opacity -= particles::HEART_FADE_PER_STEP;
        self.rotation += self.rotation_speed;
    }

    pub fn is_faded(&self) -> bool {
        self.opacity <= 0.0
    }
}
