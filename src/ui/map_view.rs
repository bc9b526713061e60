// SPDX-License-Identifier: MPL-2.0
//! Map section: the marker canvas, category filter, marker popup, and the
//! location cards beneath the map.
//!
//! The canvas is a pure projection of [`MapViewState`]: only attached markers
//! are drawn, and the interaction hint floats until the first interaction.

use crate::content::{Catalog, Category};
use crate::domain::filter::{CategoryFilter, FilterState};
use crate::domain::map::MapViewState;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, canvas, mouse_area, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, Element, Length, Point, Rectangle, Theme,
};

/// Category buttons offered above the map, in display order.
pub const FILTER_BUTTONS: [CategoryFilter; 4] = [
    CategoryFilter::All,
    CategoryFilter::Only(Category::Natura),
    CategoryFilter::Only(Category::Cultura),
    CategoryFilter::Only(Category::Tecnologia),
];

/// Contextual data needed to render the map section.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub filter: &'a FilterState,
    pub map: &'a MapViewState,
}

/// Messages emitted by the map section.
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(CategoryFilter),
    /// Any press on the map surface: arms scroll zoom, hides the hint.
    MapPressed,
    /// Wheel movement over the map surface (lines of scroll).
    Scrolled(f32),
    ZoomIn,
    ZoomOut,
    MarkerSelected(String),
    ClosePopup,
    /// Open the external maps link for a location.
    OpenInMaps(String),
}

/// Render the map section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Mappa dei luoghi").size(typography::TITLE_LG);

    let mut filter_row = Row::new().spacing(spacing::XS);
    for filter in FILTER_BUTTONS {
        let control = button(Text::new(filter.display_name()).size(typography::BODY_SM))
            .on_press(Message::CategorySelected(filter))
            .padding(spacing::XS);
        let control = if filter == ctx.filter.active_category() {
            control.style(styles::button::selected)
        } else {
            control.style(styles::button::outline)
        };
        filter_row = filter_row.push(control);
    }

    let surface = map_surface(ctx.map);

    let zoom_controls = Row::new()
        .spacing(spacing::XXS)
        .push(
            button(Text::new("+").size(typography::BODY_LG))
                .on_press(Message::ZoomIn)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        )
        .push(
            button(Text::new("−").size(typography::BODY_LG))
                .on_press(Message::ZoomOut)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        );

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(title)
        .push(filter_row)
        .push(surface)
        .push(zoom_controls);

    if let Some(marker) = ctx.map.selected_marker() {
        content = content.push(marker_popup(marker));
    }

    content = content.push(location_cards(&ctx));
    content.into()
}

/// The canvas plus the floating interaction hint, wrapped in a mouse area so
/// presses and wheel movement reach the update loop.
fn map_surface<'a>(map: &'a MapViewState) -> Element<'a, Message> {
    let canvas_widget = canvas::Canvas::new(MarkerMap { map })
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MAP_HEIGHT));

    let mut layers = Stack::new().push(canvas_widget);

    if map.hint_visible() {
        layers = layers.push(
            Container::new(
                Container::new(
                    Text::new("Clicca sulla mappa per attivare lo zoom").size(typography::BODY_SM),
                )
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::hint),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MAP_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::SM),
        );
    }

    mouse_area(layers)
        .on_press(Message::MapPressed)
        .on_scroll(|delta| {
            let lines = match delta {
                mouse::ScrollDelta::Lines { y, .. } => y,
                mouse::ScrollDelta::Pixels { y, .. } => y / 40.0,
            };
            Message::Scrolled(lines)
        })
        .into()
}

fn marker_popup(marker: &crate::domain::map::Marker) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(format!("{} {}", marker.icon, marker.name)).size(typography::TITLE_SM))
        .push(iced::widget::horizontal_space())
        .push(
            button(icons::sized(icons::cross(), sizing::ICON_SM))
                .on_press(Message::ClosePopup)
                .padding(spacing::XXS)
                .style(styles::button::bare),
        );

    let go_there = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::map_pin(), sizing::ICON_SM))
            .push(Text::new("Portami lì").size(typography::BODY_SM)),
    )
    .on_press(Message::OpenInMaps(marker.id.clone()))
    .padding(spacing::XS)
    .style(styles::button::primary);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(Text::new(&marker.description).size(typography::BODY))
            .push(go_there),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::popup)
    .into()
}

fn location_cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut cards = Column::new().spacing(spacing::SM).width(Length::Fill);
    cards = cards.push(Text::new("Luoghi").size(typography::TITLE_SM));

    for location in &ctx.catalog.locations {
        if !ctx.filter.active_category().matches(location.category) {
            continue;
        }

        let actions = Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new("Mostra sulla mappa").size(typography::BODY_SM))
                    .on_press(Message::MarkerSelected(location.id.clone()))
                    .padding(spacing::XS)
                    .style(styles::button::outline),
            )
            .push(
                button(
                    Row::new()
                        .spacing(spacing::XXS)
                        .align_y(Vertical::Center)
                        .push(icons::sized(icons::external_link(), sizing::ICON_SM))
                        .push(Text::new("Portami lì").size(typography::BODY_SM)),
                )
                .on_press(Message::OpenInMaps(location.id.clone()))
                .padding(spacing::XS)
                .style(styles::button::outline),
            );

        let card = Column::new()
            .spacing(spacing::XXS)
            .padding(spacing::SM)
            .push(
                Text::new(format!("{} {}", location.icon, location.name))
                    .size(typography::BODY_LG),
            )
            .push(Text::new(&location.description).size(typography::BODY_SM))
            .push(actions);

        cards = cards.push(
            Container::new(card)
                .width(Length::Fill)
                .style(styles::container::card),
        );
    }

    cards.into()
}

/// Canvas program drawing the attached markers over a flat town background.
struct MarkerMap<'a> {
    map: &'a MapViewState,
}

impl<'a, Message> canvas::Program<Message> for MarkerMap<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let height = bounds.height;

        // Land background with a faint graticule.
        let background =
            canvas::Path::rectangle(Point::ORIGIN, iced::Size::new(width, height));
        frame.fill(&background, palette::MAP_LAND);

        const GRID_STEP: f32 = 48.0;
        let grid_stroke = canvas::Stroke::default()
            .with_color(palette::MAP_GRID)
            .with_width(1.0);
        let mut x = GRID_STEP;
        while x < width {
            let line = canvas::Path::line(Point::new(x, 0.0), Point::new(x, height));
            frame.stroke(&line, grid_stroke.clone());
            x += GRID_STEP;
        }
        let mut y = GRID_STEP;
        while y < height {
            let line = canvas::Path::line(Point::new(0.0, y), Point::new(width, y));
            frame.stroke(&line, grid_stroke.clone());
            y += GRID_STEP;
        }

        let selected_id = self.map.selected_marker().map(|m| m.id.clone());

        for marker in self.map.attached_markers() {
            let (px, py) = self.map.project(marker.position, width, height);
            if px < -sizing::MARKER_RADIUS
                || py < -sizing::MARKER_RADIUS
                || px > width + sizing::MARKER_RADIUS
                || py > height + sizing::MARKER_RADIUS
            {
                continue;
            }

            let is_selected = selected_id.as_deref() == Some(marker.id.as_str());
            let radius = if is_selected {
                sizing::MARKER_RADIUS + 3.0
            } else {
                sizing::MARKER_RADIUS
            };

            let dot = canvas::Path::circle(Point::new(px, py), radius);
            let fill = if is_selected {
                palette::PRIMARY_600
            } else {
                palette::PRIMARY_400
            };
            frame.fill(&dot, fill);
            frame.stroke(
                &dot,
                canvas::Stroke::default()
                    .with_color(palette::WHITE)
                    .with_width(2.0),
            );

            if is_selected {
                frame.fill_text(canvas::Text {
                    content: marker.name.clone(),
                    position: Point::new(px, py - radius - spacing::SM),
                    color: palette::GRAY_900,
                    size: typography::CAPTION.into(),
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}
