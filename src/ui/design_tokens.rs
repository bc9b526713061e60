// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors (warm heritage hues plus semantic tiers)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border / Radius / Shadow**: stroke, corner, and elevation scales
//!
//! Tokens are designed to be consistent; keep the ratios when changing them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.11, 0.10);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.30, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.43, 0.41);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.76, 0.73);
    pub const GRAY_100: Color = Color::from_rgb(0.89, 0.87, 0.84);

    // Brand colors (terracotta scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.97, 0.90, 0.84);
    pub const PRIMARY_200: Color = Color::from_rgb(0.93, 0.79, 0.67);
    pub const PRIMARY_400: Color = Color::from_rgb(0.82, 0.54, 0.36);
    pub const PRIMARY_500: Color = Color::from_rgb(0.74, 0.44, 0.27);
    pub const PRIMARY_600: Color = Color::from_rgb(0.64, 0.36, 0.21);
    pub const PRIMARY_700: Color = Color::from_rgb(0.52, 0.29, 0.17);

    // Accent (olive scale, for the map and nature content)
    pub const ACCENT_400: Color = Color::from_rgb(0.55, 0.62, 0.38);
    pub const ACCENT_600: Color = Color::from_rgb(0.38, 0.45, 0.24);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Map surface
    pub const MAP_WATER: Color = Color::from_rgb(0.71, 0.82, 0.88);
    pub const MAP_LAND: Color = Color::from_rgb(0.93, 0.92, 0.88);
    pub const MAP_GRID: Color = Color::from_rgb(0.82, 0.81, 0.77);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Component sizes
    pub const NAVBAR_HEIGHT: f32 = 52.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MODAL_WIDTH: f32 = 420.0;
    pub const MAP_HEIGHT: f32 = 380.0;
    pub const MARKER_RADIUS: f32 = 7.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - card and dialog headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - group headers.
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - emphasis text.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - most UI text.
    pub const BODY: f32 = 14.0;

    /// Small body - hints, secondary labels.
    pub const BODY_SM: f32 = 13.0;

    /// Caption - badges, counters.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - separators, input fields.
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis borders, toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::INFO_500);
        assert_ne!(palette::WARNING_500, palette::ERROR_500);
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
    }

    #[test]
    fn brand_scale_darkens_with_index() {
        assert!(palette::PRIMARY_500.r < palette::PRIMARY_200.r);
        assert!(palette::PRIMARY_700.r < palette::PRIMARY_500.r);
    }
}
