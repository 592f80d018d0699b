//! The decline button that runs away from the pointer

use crate::config::evasive::MARGIN_RATIO;
use rand::Rng;

/// Random top-left corner for a control of `control` size inside the
/// central region of `viewport`, never clipping the region's far edges.
/// A viewport smaller than the margins degrades to the margin corner.
pub fn safe_position(rng: &mut impl Rng, viewport: (f32, f32), control: (f32, f32)) -> (f32, f32) {
    let (width, height) = viewport;
    let margin_x = width * MARGIN_RATIO;
    let margin_y = height * MARGIN_RATIO;

    let available_width = (width - margin_x * 2.0 - control.0).max(0.0);
    let available_height = (height - margin_y * 2.0 - control.1).max(0.0);

    (
        margin_x + rng.gen_range(0.0..1.0) * available_width,
        margin_y + rng.gen_range(0.0..1.0) * available_height,
    )
}

/// Placement of the decline control
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Placement {
    /// Where the dialog layout puts it
    #[default]
    Docked,
    /// Absolutely positioned at this top-left corner
    Floating { x: f32, y: f32 },
    Hidden,
}

#[derive(Debug, Clone, Default)]
pub struct EvasiveControl {
    placement: Placement,
}

impl EvasiveControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_hidden(&self) -> bool {
        self.placement == Placement::Hidden
    }

    /// Jump somewhere else. A hidden control stays hidden.
    pub fn relocate(
        &mut self,
        rng: &mut impl Rng,
        viewport: (f32, f32),
        control: (f32, f32),
    ) -> Option<(f32, f32)> {
        if self.is_hidden() {
            return None;
        }
        let (x, y) = safe_position(rng, viewport, control);
        self.placement = Placement::Floating { x, y };
        Some((x, y))
    }

    pub fn hide(&mut self) {
        self.placement = Placement::Hidden;
    }

    /// Back to visible and docked, dropping any absolute position
    pub fn reset(&mut self) {
        self.placement = Placement::Docked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_position_stays_in_safe_rect() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let (x, y) = safe_position(&mut rng, (1000.0, 800.0), (100.0, 40.0));
            assert!((200.0..=700.0).contains(&x), "x = {x}");
            assert!((160.0..=600.0).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn test_far_edge_of_safe_rect_is_reachable() {
        // Every draw is the largest value the generator can produce
        let mut rng = StepRng::new(u64::MAX, 0);
        let (x, y) = safe_position(&mut rng, (1000.0, 800.0), (100.0, 40.0));
        assert!(x > 699.0 && x <= 700.0, "x = {x}");
        assert!(y > 599.0 && y <= 600.0, "y = {y}");

        let mut rng = StepRng::new(0, 0);
        assert_eq!(safe_position(&mut rng, (1000.0, 800.0), (100.0, 40.0)), (200.0, 160.0));
    }

    #[test]
    fn test_odd_viewports_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for (w, h, cw, ch) in [(1920.0, 1080.0, 140.0, 48.0), (320.0, 568.0, 90.0, 30.0)] {
            for _ in 0..200 {
                let (x, y) = safe_position(&mut rng, (w, h), (cw, ch));
                assert!(x >= 0.2 * w && x <= 0.8 * w - cw + 1e-3);
                assert!(y >= 0.2 * h && y <= 0.8 * h - ch + 1e-3);
            }
        }
    }

    #[test]
    fn test_degenerate_viewport_returns_margin_corner() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(safe_position(&mut rng, (0.0, 0.0), (100.0, 40.0)), (0.0, 0.0));
        // Control wider than the central region
        assert_eq!(safe_position(&mut rng, (200.0, 100.0), (150.0, 80.0)), (40.0, 20.0));
    }

    #[test]
    fn test_hidden_control_does_not_move() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut control = EvasiveControl::new();
        control.hide();
        assert_eq!(control.relocate(&mut rng, (1000.0, 800.0), (100.0, 40.0)), None);
        assert!(control.is_hidden());
    }

    #[test]
    fn test_reset_docks_control() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut control = EvasiveControl::new();
        control.relocate(&mut rng, (1000.0, 800.0), (100.0, 40.0));
        assert!(matches!(control.placement(), Placement::Floating { .. }));
        control.reset();
        assert_eq!(control.placement(), Placement::Docked);
    }
}
