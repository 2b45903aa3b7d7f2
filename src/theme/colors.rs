//! Colors - Dashboard Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Dashboard color palette - All colors are accessed via associated functions
pub struct UiColors;

impl UiColors {
    // Surfaces
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Dialog and popover surface
    pub fn surface() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn foreground() -> Rgba { rgb(0x1f2937) }
    /// Secondary text (descriptions, hints)
    pub fn muted_foreground() -> Rgba { rgb(0x6b7280) }
    /// Text on primary-colored fills
    pub fn primary_foreground() -> Rgba { rgb(0xffffff) }

    // Accent
    /// Primary accent - Blue
    pub fn primary() -> Rgba { rgb(0x3b82f6) }

    // Borders
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Input border (checkbox box)
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
}

impl UiColors {
    /// Backdrop color at the given opacity (clamped to 0..=1)
    pub fn overlay(opacity: f32) -> Rgba {
        Rgba {
            a: opacity.clamp(0.0, 1.0),
            ..rgba(0x000000ff)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_opacity_is_clamped() {
        assert_eq!(UiColors::overlay(0.8).a, 0.8);
        assert_eq!(UiColors::overlay(2.0).a, 1.0);
        assert_eq!(UiColors::overlay(-1.0).a, 0.0);
        assert_eq!(UiColors::overlay(0.5).r, 0.0);
    }
}
