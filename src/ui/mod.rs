//! UI layout and hit-testing

mod card;
mod dialog;
mod tree;
mod types;

pub use types::{Rect, UiNode};
pub use tree::UiTree;
