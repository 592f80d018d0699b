//! Centralized configuration constants for the proposal card
//!
//! Tunable numbers live here. Velocities and sizes are logical pixels per
//! 60 Hz frame; durations are milliseconds.

/// Layout constants (in logical pixels, will be scaled by DPI)
pub mod layout {
    /// Maximum card width
    pub const CARD_MAX_WIDTH: f32 = 440.0;
    /// Maximum card height
    pub const CARD_MAX_HEIGHT: f32 = 540.0;
    /// Card share of the viewport when the window is small
    pub const CARD_VIEWPORT_RATIO: f32 = 0.85;
    /// General padding inside the card and dialog
    pub const PADDING: f32 = 24.0;
    /// Reveal button size
    pub const REVEAL_BUTTON_WIDTH: f32 = 220.0;
    pub const REVEAL_BUTTON_HEIGHT: f32 = 48.0;
    /// Proposal dialog size
    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const DIALOG_HEIGHT: f32 = 240.0;
    /// Accept / decline button size
    pub const CHOICE_BUTTON_WIDTH: f32 = 140.0;
    pub const CHOICE_BUTTON_HEIGHT: f32 = 48.0;
    /// Corner radius for card, buttons and dialog
    pub const CORNER_RADIUS: f32 = 16.0;

    /// Reveal button scale while held, and the spring it settles on after
    pub const REVEAL_PRESSED_SCALE: f32 = 0.95;
    pub const REVEAL_RELEASED_SCALE: f32 = 1.05;
}

/// Timing constants (in milliseconds)
pub mod timing {
    /// Fixed simulation step (~60 FPS)
    pub const FRAME_MICROS: u64 = 16_667;
    /// Upper bound of field steps per advance, protects against stalls
    pub const MAX_STEPS_PER_ADVANCE: u32 = 30;
    /// Floating heart spawner period
    pub const FLOATING_HEART_MS: u64 = 300;
    /// Delay between hiding the old message and showing the next one
    pub const MESSAGE_SWAP_MS: u64 = 300;
    /// Reveal button press animation
    pub const BUTTON_PRESS_MS: u64 = 100;
    /// Spacing between the bursts of a huge explosion
    pub const EXPLOSION_STAGGER_MS: u64 = 200;
}

/// Particle system constants
pub mod particles {
    /// Ambient background particles
    pub const AMBIENT_COUNT: usize = 50;
    pub const AMBIENT_MAX_SPEED: f32 = 0.25;
    pub const AMBIENT_MAX_RADIUS: f32 = 2.0;
    pub const AMBIENT_MAX_ALPHA: f32 = 0.5;
    /// Hearts per burst
    pub const BURST_COUNT: usize = 30;
    /// Bursts per huge explosion
    pub const EXPLOSION_BURSTS: u64 = 5;
    /// Default heart physics
    pub const HEART_GRAVITY: f32 = 0.2;
    pub const HEART_FADE_PER_STEP: f32 = 0.01;
    pub const HEART_MIN_SIZE: f32 = 5.0;
    pub const HEART_MAX_SIZE: f32 = 15.0;
    /// Floating hearts stop spawning above this many live hearts
    pub const FLOATING_SOFT_CAP: usize = 50;
    pub const FLOATING_OPACITY: f32 = 0.8;
    /// Spawn offset below the bottom edge
    pub const FLOATING_SPAWN_OFFSET: f32 = 20.0;
    /// Probability of a sparkle on pointer move
    pub const SPARKLE_CHANCE: f64 = 0.1;
    /// Sparkle lifetime in frames (one second)
    pub const SPARKLE_LIFETIME: u32 = 60;
}

/// Heart curtain constants
pub mod curtain {
    /// Batch period
    pub const BATCH_MS: u64 = 30;
    /// Hearts per batch
    pub const BATCH_SIZE: usize = 40;
    pub const MIN_SIZE: f32 = 10.0;
    pub const MAX_SIZE: f32 = 25.0;
    pub const MIN_FALL_SPEED: f32 = 8.0;
    pub const MAX_FALL_SPEED: f32 = 16.0;
    /// Spawn band above the top edge
    pub const SPAWN_TOP: f32 = -250.0;
    pub const SPAWN_BOTTOM: f32 = -50.0;
}

/// Evasive decline control
pub mod evasive {
    /// Share of each viewport dimension kept clear on every side
    pub const MARGIN_RATIO: f32 = 0.2;
}

/// Music volume and fade
pub mod audio {
    /// Volume when the card opens
    pub const OPENING_VOLUME: f32 = 0.3;
    /// Volume after acceptance
    pub const CELEBRATION_VOLUME: f32 = 0.5;
    /// Fade-out step period
    pub const FADE_STEP_MS: u64 = 400;
    /// Volume removed per fade step
    pub const FADE_STEP: f32 = 0.05;
}
