// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use regalbuto_heritage::ui::design_tokens::{opacity, palette, sizing, spacing};
    use regalbuto_heritage::ui::styles::{button, container};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::outline(&theme, iced::widget::button::Status::Hovered);
        let _ = button::selected(&theme, iced::widget::button::Status::Active);
        let _ = button::bare(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn container_styles_have_backgrounds() {
        let theme = Theme::Light;

        assert!(container::card(&theme).background.is_some());
        assert!(container::modal(&theme).background.is_some());
        assert!(container::backdrop(&theme).background.is_some());
        assert!(container::popup(&theme).background.is_some());
        assert!(container::hint(&theme).background.is_some());
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::MAP_LAND;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::ICON_LG;
    }

    #[test]
    fn selected_and_outline_styles_are_distinguishable() {
        let theme = Theme::Light;
        let selected = button::selected(&theme, iced::widget::button::Status::Active);
        let outline = button::outline(&theme, iced::widget::button::Status::Active);
        assert_ne!(selected.background, outline.background);
    }
}
