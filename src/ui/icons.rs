// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are feather-style SVGs embedded at compile time via `include_bytes!`;
//! handles are cached with `OnceLock` so each asset is parsed once. The SVGs
//! use `currentColor`, so [`tinted`] can recolor them per theme.
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_scanner`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            use std::sync::OnceLock;
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(home, "home.svg", "House silhouette.");
define_icon!(landmark, "landmark.svg", "Columned building pediment.");
define_icon!(map, "map.svg", "Folded map.");
define_icon!(help_circle, "help-circle.svg", "Question mark in a circle.");
define_icon!(compass, "compass.svg", "Compass needle in a circle.");
define_icon!(camera, "camera.svg", "Camera body with lens.");
define_icon!(cross, "cross.svg", "Diagonal cross (close).");
define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(map_pin, "map-pin.svg", "Drop-shaped map pin.");
define_icon!(headphones, "headphones.svg", "Headphones arc.");
define_icon!(chevron_down, "chevron-down.svg", "Chevron pointing down.");
define_icon!(chevron_up, "chevron-up.svg", "Chevron pointing up.");
define_icon!(
    external_link,
    "external-link.svg",
    "Box with outgoing arrow."
);
define_icon!(maximize, "maximize.svg", "Four expanding corners.");
define_icon!(eye, "eye.svg", "Open eye.");
define_icon!(rotate_ccw, "rotate-ccw.svg", "Counter-clockwise arrow.");
define_icon!(
    check_circle,
    "check-circle.svg",
    "Checkmark in a circle."
);
define_icon!(info, "info.svg", "Letter i in a circle.");
define_icon!(warning, "alert-triangle.svg", "Exclamation triangle.");
define_icon!(image, "image.svg", "Framed photograph.");
define_icon!(play, "play.svg", "Triangle pointing right.");

/// Constrains an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon; the SVG sources stroke with `currentColor`.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}
