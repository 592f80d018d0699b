//! Visible state of the card, dialog and overlays

use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub card_open: bool,
    /// Text in the message display, empty before the first reveal
    pub message: String,
    /// Whether the message display is fading in (true) or out (false)
    pub message_shown: bool,
    /// Current fade of the message display, 0.0-1.0
    pub message_opacity: f32,
    /// Reveal button label, swapped together with the message
    pub reveal_label: String,
    /// Reveal button scale: 1.0 at rest, pressed or sprung after a press
    pub reveal_scale: f32,
    pub dialog_visible: bool,
    pub accept_label: String,
    pub kiss_visible: bool,
    /// Particles are drawn above the card and dialog
    pub canvas_raised: bool,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            card_open: false,
            message: String::new(),
            message_shown: false,
            message_opacity: 0.0,
            reveal_label: settings.reveal_label.clone(),
            reveal_scale: 1.0,
            dialog_visible: false,
            accept_label: settings.accept_label.clone(),
            kiss_visible: false,
            canvas_raised: false,
        }
    }
}
