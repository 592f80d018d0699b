//! Particle field: ambient dots, hearts and pointer sparkles
//!
//! Pure simulation. The renderer reads the collections through the
//! accessors and never mutates them.

mod heart;
mod particle;
mod sparkle;

use crate::config::{curtain, particles};
use rand::Rng;

pub use heart::Heart;
pub use particle::{Particle, Rgba};
pub use sparkle::Sparkle;

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    hearts: Vec<Heart>,
    sparkles: Vec<Sparkle>,
    width: f32,
    height: f32,
    scale: f32,
}

impl ParticleField {
    /// Create a field with the ambient particles scattered over the viewport
    pub fn new(rng: &mut impl Rng, width: f32, height: f32, scale: f32) -> Self {
        let particles = (0..particles::AMBIENT_COUNT)
            .map(|_| Particle::random(rng, width, height, scale))
            .collect();

        Self {
            particles,
            hearts: Vec::new(),
            sparkles: Vec::new(),
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

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    /// Advance everything by one simulation step and drop faded hearts
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }

        self.hearts.retain_mut(|heart| {
            heart.step();
            !heart.is_faded()
        });

        self.sparkles.retain_mut(|sparkle| {
            sparkle.step();
            !sparkle.is_expired()
        });
    }

    /// Explosion of `count` hearts at (x, y)
    pub fn spawn_burst(&mut self, rng: &mut impl Rng, x: f32, y: f32, count: usize) {
        self.hearts.reserve(count);
        for _ in 0..count {
            self.hearts.push(Heart::burst(rng, x, y, self.scale));
        }
    }

    /// One rising heart, skipped while the field is already busy.
    /// Returns whether a heart was added.
    pub fn spawn_floating(&mut self, rng: &mut impl Rng) -> bool {
        if self.hearts.len() >= particles::FLOATING_SOFT_CAP {
            return false;
        }
        self.hearts
            .push(Heart::floating(rng, self.width, self.height, self.scale));
        true
    }

    /// One batch of the falling curtain across the full width
    pub fn spawn_curtain_batch(&mut self, rng: &mut impl Rng) {
        self.hearts.reserve(curtain::BATCH_SIZE);
        for _ in 0..curtain::BATCH_SIZE {
            self.hearts.push(Heart::curtain(rng, self.width, self.scale));
        }
    }

    pub fn spawn_sparkle(&mut self, x: f32, y: f32) {
        self.sparkles.push(Sparkle::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field() -> (ParticleField, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let field = ParticleField::new(&mut rng, 1000.0, 800.0, 1.0);
        (field, rng)
    }

    #[test]
    fn test_ambient_particles_inside_viewport() {
        let (field, _) = field();
        assert_eq!(field.particles().len(), particles::AMBIENT_COUNT);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x <= 1000.0);
            assert!(p.y >= 0.0 && p.y <= 800.0);
        }
    }

    #[test]
    fn test_burst_adds_exactly_count_hearts() {
        let (mut field, mut rng) = field();
        for round in 1..=5 {
            field.spawn_burst(&mut rng, 500.0, 400.0, 30);
            assert_eq!(field.hearts().len(), 30 * round);
        }
    }

    #[test]
    fn test_heart_opacity_decreases_until_removed() {
        let (mut field, mut rng) = field();
        field.spawn_burst(&mut rng, 500.0, 400.0, 1);

        let mut last = field.hearts()[0].opacity;
        let mut steps = 0;
        while !field.hearts().is_empty() {
            field.step();
            steps += 1;
            if let Some(heart) = field.hearts().first() {
                assert!(heart.opacity < last);
                assert!(heart.opacity > 0.0);
                last = heart.opacity;
            }
            assert!(steps <= 101, "heart outlived its fade");
        }

        // Gone for good
        for _ in 0..10 {
            field.step();
            assert!(field.hearts().is_empty());
        }
    }

    #[test]
    fn test_floating_respects_soft_cap() {
        let (mut field, mut rng) = field();
        field.spawn_burst(&mut rng, 0.0, 0.0, particles::FLOATING_SOFT_CAP - 1);
        assert!(field.spawn_floating(&mut rng));
        assert!(!field.spawn_floating(&mut rng));
        assert_eq!(field.hearts().len(), particles::FLOATING_SOFT_CAP);
    }

    #[test]
    fn test_curtain_is_not_capped() {
        let (mut field, mut rng) = field();
        for _ in 0..3 {
            field.spawn_curtain_batch(&mut rng);
        }
        assert_eq!(field.hearts().len(), 3 * curtain::BATCH_SIZE);
    }

    #[test]
    fn test_sparkle_expires_after_lifetime() {
        let (mut field, _) = field();
        field.spawn_sparkle(10.0, 10.0);
        for _ in 0..particles::SPARKLE_LIFETIME - 1 {
            field.step();
        }
        assert_eq!(field.sparkles().len(), 1);
        field.step();
        assert!(field.sparkles().is_empty());
    }
}
