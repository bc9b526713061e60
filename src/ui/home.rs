// SPDX-License-Identifier: MPL-2.0
//! Home section: hero banner and the featured cards accordion.

use crate::content::Catalog;
use crate::domain::panels::PanelGroup;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the home section.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub featured: &'a PanelGroup,
}

/// Messages emitted by the home section.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle a featured card's expanded details.
    ToggleCard(String),
    /// Jump straight into the virtual tour.
    StartTour,
}

/// Render the home section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Benvenuti a Regalbuto").size(typography::TITLE_LG);
    let subtitle = Text::new(
        "Scopri monumenti, natura e storia del cuore della Sicilia: \
         esplora la mappa, metti alla prova le tue conoscenze con il quiz \
         o inquadra un QR code in giro per il paese.",
    )
    .size(typography::BODY_LG);

    let tour_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::play(), sizing::ICON_SM))
            .push(Text::new("Inizia il tour virtuale").size(typography::BODY)),
    )
    .on_press(Message::StartTour)
    .padding(spacing::SM)
    .style(styles::button::primary);

    let mut cards = Column::new().spacing(spacing::SM).width(Length::Fill);
    cards = cards.push(Text::new("In evidenza").size(typography::TITLE_SM));

    for monument in ctx.catalog.featured_monuments() {
        cards = cards.push(featured_card(ctx.featured, monument));
    }

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .push(title)
        .push(subtitle)
        .push(tour_button)
        .push(cards)
        .into()
}

fn featured_card<'a>(
    featured: &'a PanelGroup,
    monument: &'a crate::content::MonumentEntry,
) -> Element<'a, Message> {
    let expanded = featured.is_expanded(&monument.id);
    let chevron = if expanded {
        icons::chevron_up()
    } else {
        icons::chevron_down()
    };

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(&monument.name).size(typography::TITLE_MD))
            .push(iced::widget::horizontal_space())
            .push(icons::sized(chevron, sizing::ICON_SM)),
    )
    .on_press(Message::ToggleCard(monument.id.clone()))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::bare);

    let mut card = Column::new().push(header);
    if expanded {
        card = card.push(
            Container::new(Text::new(&monument.description).size(typography::BODY))
                .padding([0.0, spacing::SM]),
        );
        card = card.push(
            Container::new(
                Text::new(monument.category.display_name()).size(typography::CAPTION),
            )
            .padding(spacing::SM),
        );
    }

    Container::new(card)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
