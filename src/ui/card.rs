//! Card layout

use super::types::Rect;
use proposal_card::config::layout;

#[derive(Debug, Clone)]
pub struct CardLayout {
    pub rect: Rect,
    /// Area for the revealed message
    pub message: Rect,
    pub reveal_button: Rect,
}

impl CardLayout {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        let viewport = Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        };
        let card_width = (layout::CARD_MAX_WIDTH * scale).min(width * layout::CARD_VIEWPORT_RATIO);
        let card_height =
            (layout::CARD_MAX_HEIGHT * scale).min(height * layout::CARD_VIEWPORT_RATIO);
        let rect = viewport.centered(card_width, card_height);

        let padding = layout::PADDING * scale;
        let button_width = (layout::REVEAL_BUTTON_WIDTH * scale).min(card_width - padding * 2.0);
        let button_height = layout::REVEAL_BUTTON_HEIGHT * scale;
        let reveal_button = Rect {
            x: rect.x + (rect.width - button_width) / 2.0,
            y: rect.y + rect.height - padding - button_height,
            width: button_width.max(0.0),
            height: button_height,
        };

        let message = Rect {
            x: rect.x + padding,
            y: rect.y + padding,
            width: (rect.width - padding * 2.0).max(0.0),
            height: (reveal_button.y - rect.y - padding * 2.0).max(0.0),
        };

        Self {
            rect,
            message,
            reveal_button,
        }
    }
}
