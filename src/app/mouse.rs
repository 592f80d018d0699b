//! Mouse and touch event handling

use super::App;
use super::pointer;
use super::state::AppResult;
use crate::ui::UiNode;
use winit::window::CursorIcon;

impl App {
    pub fn handle_mouse_move(&mut self, x: f32, y: f32) -> AppResult {
        self.state.hovered = pointer::hover(&mut self.experience, &self.ui_tree, x, y);
        // Frames are continuous, hover changes show up on the next one
        AppResult::Ok
    }

    pub fn click_at(&mut self, x: f32, y: f32) -> AppResult {
        match pointer::press(&mut self.experience, &self.ui_tree, x, y) {
            UiNode::None | UiNode::Dialog => AppResult::Ok,
            _ => AppResult::Redraw,
        }
    }

    /// Touch start behaves like a click; there is no follow-up click event
    pub fn touch_at(&mut self, x: f32, y: f32) -> AppResult {
        self.click_at(x, y)
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        let clickable = self.state.hovered.is_clickable()
            || (self.state.hovered == UiNode::Card && !self.experience.ui().card_open);
        if clickable {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        }
    }
}
