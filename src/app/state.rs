//! Application state types

use crate::ui::UiNode;
use proposal_card::config::timing;
use std::time::{Duration, Instant};

/// Result type for application actions that may trigger UI updates
#[must_use = "Handle the AppResult to ensure the UI updates correctly"]
pub enum AppResult {
    /// No action needed
    Ok,
    /// UI needs to be redrawn
    Redraw,
}

impl AppResult {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, AppResult::Redraw)
    }
}

/// Transient pointer and frame-clock state
pub struct PointerState {
    pub hovered: UiNode,
    pub last_tick: Instant,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            hovered: UiNode::None,
            last_tick: Instant::now(),
        }
    }
}

impl PointerState {
    /// When the event loop should wake for the next frame
    pub fn next_frame(&self) -> Instant {
        self.last_tick + Duration::from_micros(timing::FRAME_MICROS)
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
