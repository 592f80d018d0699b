//! UI tree coordinator for hit-testing

use super::card::CardLayout;
use super::dialog::DialogLayout;
use super::types::{Rect, UiNode};
use proposal_card::evasive::Placement;
use proposal_card::experience::UiState;

#[derive(Debug, Clone)]
pub struct UiTree {
    pub card: CardLayout,
    pub dialog: DialogLayout,
}

impl UiTree {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            card: CardLayout::new(width, height, scale),
            dialog: DialogLayout::new(width, height, scale),
        }
    }

    /// Where the decline button currently is, if visible
    pub fn decline_rect(&self, placement: Placement) -> Option<Rect> {
        let docked = self.dialog.decline;
        match placement {
            Placement::Docked => Some(docked),
            Placement::Floating { x, y } => Some(Rect { x, y, ..docked }),
            Placement::Hidden => None,
        }
    }

    pub fn decline_size(&self) -> (f32, f32) {
        self.dialog.decline.size()
    }

    pub fn hit_test(&self, x: f32, y: f32, ui: &UiState, decline: Placement) -> UiNode {
        if ui.dialog_visible {
            // A floating decline button can sit anywhere, check it first
            if self
                .decline_rect(decline)
                .is_some_and(|rect| rect.contains(x, y))
            {
                return UiNode::DeclineButton;
            }
            if self.dialog.accept.contains(x, y) {
                return UiNode::AcceptButton;
            }
            // The dialog is modal
            return UiNode::Dialog;
        }

        if ui.card_open && self.card.reveal_button.contains(x, y) {
            return UiNode::RevealButton;
        }

        if self.card.rect.contains(x, y) {
            return UiNode::Card;
        }

        UiNode::None
    }
}
