//! Theme colors for the card

pub struct Theme {
    /// Background gradient top (RGB 0.0-1.0)
    pub bg_top: (f32, f32, f32),
    /// Background gradient bottom
    pub bg_bottom: (f32, f32, f32),
    /// Card face
    pub card: (f32, f32, f32),
    /// Card border and accents
    pub card_border: (f32, f32, f32),
    /// Body text
    pub fg: (f32, f32, f32),
    /// Secondary text on the closed card
    pub fg_muted: (f32, f32, f32),
    /// Reveal and accept buttons
    pub button_bg: (f32, f32, f32),
    pub button_hover: (f32, f32, f32),
    pub button_fg: (f32, f32, f32),
    /// Decline button
    pub decline_bg: (f32, f32, f32),
    pub decline_fg: (f32, f32, f32),
    /// Dimmed backdrop behind the dialog (RGBA)
    pub backdrop: (f32, f32, f32, f32),
    /// Heart fill
    pub heart: (f32, f32, f32),
    /// Pointer sparkles
    pub sparkle: (f32, f32, f32),
}

impl Theme {
    pub fn rose() -> Self {
        Self {
            bg_top: (1.0, 0.89, 0.91),          // Blush
            bg_bottom: (1.0, 0.76, 0.82),       // Pink
            card: (1.0, 0.98, 0.98),            // Paper white
            card_border: (1.0, 0.56, 0.64),     // Rose
            fg: (0.35, 0.09, 0.17),             // Deep wine
            fg_muted: (0.6, 0.3, 0.38),         // Faded wine
            button_bg: (1.0, 0.3, 0.43),        // #ff4d6d
            button_hover: (0.9, 0.22, 0.35),    // Darker rose
            button_fg: (1.0, 1.0, 1.0),
            decline_bg: (0.92, 0.9, 0.91),      // Soft grey
            decline_fg: (0.4, 0.35, 0.37),
            backdrop: (0.2, 0.02, 0.08, 0.45),
            heart: (1.0, 0.3, 0.43),            // #ff4d6d
            sparkle: (1.0, 0.84, 0.4),          // Gold
        }
    }
}
