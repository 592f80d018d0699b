//! Font loading and discovery

use femtovg::{Canvas, FontId, renderer::OpenGl};

/// Load a proportional font with Cyrillic coverage, plus fallbacks
pub fn load_fonts(canvas: &mut Canvas<OpenGl>) -> Vec<FontId> {
    let mut fonts = Vec::new();

    // 1. Rounded sans fonts look best on the card
    let primary_paths = [
        "/usr/share/fonts/truetype/ubuntu/Ubuntu-R.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\segoeui.ttf",
    ];

    for path in &primary_paths {
        if let Ok(font) = canvas.add_font(path) {
            fonts.push(font);
            break;
        }
    }

    // 2. Fallbacks for glyphs the primary font lacks (hearts, symbols)
    let fallback_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    for path in &fallback_paths {
        if let Ok(font) = canvas.add_font(path) {
            fonts.push(font);
        }
    }

    // 3. Last resort: any TTF under the system font directory
    if fonts.is_empty() {
        if let Ok(entries) = std::fs::read_dir("/usr/share/fonts/truetype") {
            'dirs: for entry in entries.flatten() {
                if !entry.path().is_dir() {
                    continue;
                }
                let Ok(sub_entries) = std::fs::read_dir(entry.path()) else {
                    continue;
                };
                for sub_entry in sub_entries.flatten() {
                    let path = sub_entry.path();
                    if path.extension().map(|e| e == "ttf").unwrap_or(false) {
                        if let Ok(font) = canvas.add_font(path) {
                            fonts.push(font);
                            break 'dirs;
                        }
                    }
                }
            }
        }
    }

    if fonts.is_empty() {
        tracing::error!(
            "no usable font found, text will not be drawn; install dejavu-fonts or liberation-fonts"
        );
    }

    fonts
}
