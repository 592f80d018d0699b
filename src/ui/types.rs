//! Core UI types and enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiNode {
    #[default]
    None,
    Card,
    RevealButton,
    Dialog,
    AcceptButton,
    DeclineButton,
}

impl UiNode {
    /// Nodes that react to a click
    pub fn is_clickable(&self) -> bool {
        matches!(
            self,
            UiNode::RevealButton | UiNode::AcceptButton | UiNode::DeclineButton
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Rect of `width` x `height` centered inside `self`
    pub fn centered(&self, width: f32, height: f32) -> Rect {
        Rect {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }
}
