//! Pointer sparkles

use crate::config::particles;

#[derive(Debug, Clone)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    pub age: u32,
}

impl Sparkle {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, age: 0 }
    }

    pub fn step(&mut self) {
        self.age += 1;
    }

    /// Remaining life in 0.0-1.0
    pub fn life_ratio(&self) -> f32 {
        1.0 - (self.age as f32 / particles::SPARKLE_LIFETIME as f32).min(1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.age >= particles::SPARKLE_LIFETIME
    }
}
