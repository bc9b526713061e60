// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the section tabs and the QR scan shortcut.

use crate::app::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Section,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectSection(Section),
    OpenScanner,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SelectSection(Section),
    OpenScanner,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectSection(section) => Event::SelectSection(section),
        Message::OpenScanner => Event::OpenScanner,
    }
}

/// Render the navigation bar.
pub fn view(ctx: &ViewContext) -> Element<'static, Message> {
    let mut tabs = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    for section in Section::ALL {
        let content = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(section_icon(section), sizing::ICON_SM))
            .push(Text::new(section.label()).size(typography::BODY));

        let tab = button(content)
            .on_press(Message::SelectSection(section))
            .padding(spacing::XS);

        let tab = if section == ctx.active {
            tab.style(styles::button::selected)
        } else {
            tab.style(styles::button::bare)
        };
        tabs = tabs.push(tab);
    }

    let scan_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::camera(), sizing::ICON_SM))
            .push(Text::new("Scansiona QR").size(typography::BODY)),
    )
    .on_press(Message::OpenScanner)
    .padding(spacing::XS)
    .style(styles::button::primary);

    let bar = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(tabs)
        .push(iced::widget::horizontal_space())
        .push(scan_button);

    Container::new(bar)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

fn section_icon(section: Section) -> Svg<'static> {
    match section {
        Section::Home => icons::home(),
        Section::Monuments => icons::landmark(),
        Section::Map => icons::map(),
        Section::Quiz => icons::help_circle(),
        Section::VirtualTour => icons::compass(),
    }
}
