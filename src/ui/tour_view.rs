// SPDX-License-Identifier: MPL-2.0
//! Virtual tour section: location list, viewer panel, and display controls.
//!
//! The panoramic viewer itself is an external web resource; the panel shows
//! the current target and hands it to the system browser.

use crate::content::Catalog;
use crate::domain::tour::TourState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the tour section.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub tour: &'a TourState,
    pub fullscreen: bool,
}

/// Messages emitted by the tour section.
#[derive(Debug, Clone)]
pub enum Message {
    LoadLocation(String),
    ToggleVr,
    ToggleFullscreen,
    ResetView,
    OpenInBrowser,
}

/// Render the virtual tour section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Tour Virtuale").size(typography::TITLE_LG);

    let mut locations = Row::new().spacing(spacing::XS);
    for tour in &ctx.catalog.tours {
        let card = button(Text::new(&tour.name).size(typography::BODY_SM))
            .on_press(Message::LoadLocation(tour.id.clone()))
            .padding(spacing::XS);
        let card = if ctx.tour.current_location() == Some(tour.id.as_str()) {
            card.style(styles::button::selected)
        } else {
            card.style(styles::button::outline)
        };
        locations = locations.push(card);
    }

    let viewer: Element<'a, Message> = match ctx.tour.resource_url() {
        Some(url) => viewer_panel(ctx, url),
        None => Container::new(
            Text::new("Seleziona un luogo per avviare il tour panoramico.")
                .size(typography::BODY_LG),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into(),
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(title)
        .push(locations)
        .push(viewer)
        .into()
}

fn viewer_panel<'a>(ctx: ViewContext<'a>, url: &'a str) -> Element<'a, Message> {
    let vr_label = if ctx.tour.vr_enabled() {
        "VR Attiva"
    } else {
        "Modalità VR"
    };
    let vr_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::eye(), sizing::ICON_SM))
            .push(Text::new(vr_label).size(typography::BODY_SM)),
    )
    .on_press(Message::ToggleVr)
    .padding(spacing::XS);
    let vr_button = if ctx.tour.vr_enabled() {
        vr_button.style(styles::button::primary)
    } else {
        vr_button.style(styles::button::outline)
    };

    let fullscreen_label = if ctx.fullscreen {
        "Esci da schermo intero"
    } else {
        "Schermo intero"
    };
    let controls = Row::new()
        .spacing(spacing::XS)
        .push(vr_button)
        .push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(icons::maximize(), sizing::ICON_SM))
                    .push(Text::new(fullscreen_label).size(typography::BODY_SM)),
            )
            .on_press(Message::ToggleFullscreen)
            .padding(spacing::XS)
            .style(styles::button::outline),
        )
        .push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(icons::rotate_ccw(), sizing::ICON_SM))
                    .push(Text::new("Reimposta vista").size(typography::BODY_SM)),
            )
            .on_press(Message::ResetView)
            .padding(spacing::XS)
            .style(styles::button::outline),
        );

    let open_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::external_link(), sizing::ICON_SM))
            .push(Text::new("Apri il panorama nel browser").size(typography::BODY)),
    )
    .on_press(Message::OpenInBrowser)
    .padding(spacing::SM)
    .style(styles::button::primary);

    let panel = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(icons::sized(icons::compass(), sizing::ICON_LG))
                .push(Text::new("Viewer panoramico").size(typography::TITLE_SM)),
        )
        .push(Text::new(url).size(typography::CAPTION))
        .push(open_button)
        .push(controls);

    Container::new(panel)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
