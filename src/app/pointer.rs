//! Pointer routing: from screen coordinates to experience actions

use crate::ui::{UiNode, UiTree};
use proposal_card::experience::Experience;

/// Pointer moved to (x, y). Returns the node under the pointer after any
/// reaction; hovering the decline button makes it jump away.
pub fn hover(experience: &mut Experience, tree: &UiTree, x: f32, y: f32) -> UiNode {
    experience.pointer_moved(x, y);

    let node = tree.hit_test(x, y, experience.ui(), experience.decline_placement());
    if node == UiNode::DeclineButton {
        experience.dodge(tree.decline_size());
        return tree.hit_test(x, y, experience.ui(), experience.decline_placement());
    }
    node
}

/// Click or touch start at (x, y). Returns the node that was pressed.
/// Pressing decline only ever moves it; declining is not possible.
pub fn press(experience: &mut Experience, tree: &UiTree, x: f32, y: f32) -> UiNode {
    let node = tree.hit_test(x, y, experience.ui(), experience.decline_placement());
    match node {
        UiNode::Card => {
            experience.open_card();
        }
        UiNode::RevealButton => {
            experience.press_reveal();
        }
        UiNode::AcceptButton => {
            experience.accept();
        }
        UiNode::DeclineButton => {
            experience.dodge(tree.decline_size());
        }
        UiNode::Dialog | UiNode::None => {}
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_card::audio::Silence;
    use proposal_card::evasive::Placement;
    use proposal_card::settings::Settings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (Experience, UiTree) {
        let experience = Experience::new(
            Settings::default(),
            Box::new(Silence::default()),
            StdRng::seed_from_u64(99),
            1000.0,
            800.0,
            1.0,
        );
        (experience, UiTree::new(1000.0, 800.0, 1.0))
    }

    fn click(experience: &mut Experience, tree: &UiTree, node: UiNode) -> UiNode {
        let rect = match node {
            UiNode::Card => tree.card.rect,
            UiNode::RevealButton => tree.card.reveal_button,
            UiNode::AcceptButton => tree.dialog.accept,
            UiNode::DeclineButton => tree
                .decline_rect(experience.decline_placement())
                .expect("decline visible"),
            _ => unreachable!(),
        };
        let (x, y) = rect.center();
        press(experience, tree, x, y)
    }

    #[test]
    fn test_full_click_path_to_acceptance() {
        let (mut exp, tree) = setup();
        assert_eq!(click(&mut exp, &tree, UiNode::Card), UiNode::Card);
        assert!(exp.ui().card_open);

        for _ in 0..7 {
            assert_eq!(click(&mut exp, &tree, UiNode::RevealButton), UiNode::RevealButton);
        }
        assert!(exp.ui().dialog_visible);

        assert_eq!(click(&mut exp, &tree, UiNode::AcceptButton), UiNode::AcceptButton);
        assert!(exp.is_celebrating());
    }

    #[test]
    fn test_decline_click_only_relocates() {
        let (mut exp, tree) = setup();
        click(&mut exp, &tree, UiNode::Card);
        for _ in 0..7 {
            click(&mut exp, &tree, UiNode::RevealButton);
        }

        for _ in 0..20 {
            assert_eq!(click(&mut exp, &tree, UiNode::DeclineButton), UiNode::DeclineButton);
            assert!(matches!(exp.decline_placement(), Placement::Floating { .. }));
        }
        assert!(exp.ui().dialog_visible);
        assert!(!exp.is_celebrating());
    }

    #[test]
    fn test_hover_over_decline_moves_it() {
        let (mut exp, tree) = setup();
        click(&mut exp, &tree, UiNode::Card);
        for _ in 0..7 {
            click(&mut exp, &tree, UiNode::RevealButton);
        }

        let (x, y) = tree.dialog.decline.center();
        hover(&mut exp, &tree, x, y);
        assert!(matches!(exp.decline_placement(), Placement::Floating { .. }));
    }
}
