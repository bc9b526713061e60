// SPDX-License-Identifier: MPL-2.0
//! Monument directory: search, category tabs, results counter, and the
//! accordion of monument cards grouped by theme.

use crate::content::{Catalog, Category, MonumentEntry};
use crate::domain::filter::{CategoryFilter, FilterState};
use crate::domain::panels::PanelGroup;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Category tabs offered by the directory, in display order.
pub const FILTER_TABS: [CategoryFilter; 4] = [
    CategoryFilter::All,
    CategoryFilter::Only(Category::Religioso),
    CategoryFilter::Only(Category::Natura),
    CategoryFilter::Only(Category::Cultura),
];

/// Thematic groups the directory renders, with the categories each hosts.
const GROUPS: [(&str, &[Category]); 3] = [
    (
        "Cultura e Storia",
        &[Category::Religioso, Category::Cultura],
    ),
    ("Natura e Paesaggio", &[Category::Natura]),
    ("Tecnologia", &[Category::Tecnologia]),
];

/// Relative scroll offset of the group hosting `category`, used by the
/// deferred scroll-after-filter. Groups are laid out in `GROUPS` order.
#[must_use]
pub fn category_scroll_offset(category: Category) -> f32 {
    match category {
        Category::Religioso | Category::Cultura => 0.0,
        Category::Natura => 0.55,
        Category::Tecnologia => 0.85,
    }
}

/// Contextual data needed to render the directory.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub filter: &'a FilterState,
    pub panels: &'a PanelGroup,
}

/// Messages emitted by the directory.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    CategorySelected(CategoryFilter),
    TogglePanel(String),
    PlayGuide(String),
}

/// Render the monument directory.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Monumenti").size(typography::TITLE_LG);

    let search = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::search(), sizing::ICON_SM))
        .push(
            text_input("Cerca un monumento...", ctx.filter.search_text())
                .on_input(Message::SearchChanged)
                .padding(spacing::XS)
                .size(typography::BODY),
        );

    let mut tabs = Row::new().spacing(spacing::XS);
    for filter in FILTER_TABS {
        let tab = button(Text::new(filter.display_name()).size(typography::BODY_SM))
            .on_press(Message::CategorySelected(filter))
            .padding(spacing::XS);
        // Exactly one tab carries the active style.
        let tab = if filter == ctx.filter.active_category() {
            tab.style(styles::button::selected)
        } else {
            tab.style(styles::button::outline)
        };
        tabs = tabs.push(tab);
    }

    let visible = ctx.filter.visible_monuments(&ctx.catalog.monuments);
    let results = Text::new(format!("{} monumenti trovati", visible.len()))
        .size(typography::BODY_SM);

    let mut groups = Column::new().spacing(spacing::LG).width(Length::Fill);
    for (group_title, categories) in GROUPS {
        let entries: Vec<&MonumentEntry> = visible
            .iter()
            .copied()
            .filter(|m| categories.contains(&m.category))
            .collect();
        if entries.is_empty() {
            continue;
        }

        let mut group = Column::new().spacing(spacing::SM);
        group = group.push(Text::new(group_title).size(typography::TITLE_SM));
        for monument in entries {
            group = group.push(monument_card(ctx.panels, monument));
        }
        groups = groups.push(group);
    }

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(title)
        .push(search)
        .push(tabs)
        .push(results)
        .push(groups)
        .into()
}

fn monument_card<'a>(
    panels: &'a PanelGroup,
    monument: &'a MonumentEntry,
) -> Element<'a, Message> {
    let expanded = panels.is_expanded(&monument.id);
    let chevron = if expanded {
        icons::chevron_up()
    } else {
        icons::chevron_down()
    };

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(&monument.name).size(typography::BODY_LG))
            .push(iced::widget::horizontal_space())
            .push(icons::sized(chevron, sizing::ICON_SM)),
    )
    .on_press(Message::TogglePanel(monument.id.clone()))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::bare);

    let mut card = Column::new().push(header);
    if expanded {
        let mut body = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(Text::new(&monument.description).size(typography::BODY));

        if monument.audio_guide.is_some() {
            body = body.push(
                button(
                    Row::new()
                        .spacing(spacing::XXS)
                        .align_y(Vertical::Center)
                        .push(icons::sized(icons::headphones(), sizing::ICON_SM))
                        .push(Text::new("Ascolta Audio Guida").size(typography::BODY_SM)),
                )
                .on_press(Message::PlayGuide(monument.id.clone()))
                .padding(spacing::XS)
                .style(styles::button::primary),
            );
        }
        card = card.push(body);
    }

    Container::new(card)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
