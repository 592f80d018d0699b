//! Proposal dialog layout

use super::types::Rect;
use proposal_card::config::layout;

#[derive(Debug, Clone)]
pub struct DialogLayout {
    pub rect: Rect,
    /// Baseline area for the question
    pub question: Rect,
    pub accept: Rect,
    /// Decline button before it starts running away
    pub decline: Rect,
}

impl DialogLayout {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        let viewport = Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        };
        let rect = viewport.centered(
            (layout::DIALOG_WIDTH * scale).min(width * 0.95),
            (layout::DIALOG_HEIGHT * scale).min(height * 0.95),
        );

        let padding = layout::PADDING * scale;
        let button_width = layout::CHOICE_BUTTON_WIDTH * scale;
        let button_height = layout::CHOICE_BUTTON_HEIGHT * scale;
        let button_y = rect.y + rect.height - padding - button_height;
        let (center_x, _) = rect.center();

        Self {
            rect,
            question: Rect {
                x: rect.x + padding,
                y: rect.y + padding,
                width: (rect.width - padding * 2.0).max(0.0),
                height: (button_y - rect.y - padding * 2.0).max(0.0),
            },
            accept: Rect {
                x: center_x - padding / 2.0 - button_width,
                y: button_y,
                width: button_width,
                height: button_height,
            },
            decline: Rect {
                x: center_x + padding / 2.0,
                y: button_y,
                width: button_width,
                height: button_height,
            },
        }
    }
}
