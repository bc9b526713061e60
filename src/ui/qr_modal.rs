// SPDX-License-Identifier: MPL-2.0
//! QR scanner modal: scan surface, file fallback, and decoded-result panel.
//!
//! The modal renders whatever [`QrSession`] says. Monument deep links never
//! reach this view: they close the session and route into the directory
//! before the next render.

use crate::domain::qr::{QrPayload, QrSession, ScanSurface};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Messages emitted by the modal.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    /// Open the image picker for the file fallback.
    PickFile,
    /// Decode the picked image.
    ScanFromFile,
    /// Open a decoded http(s) link externally.
    OpenLink(String),
}

/// Render the modal shell.
pub fn view(session: &QrSession) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::camera(), sizing::ICON_MD))
        .push(Text::new("Scanner QR").size(typography::TITLE_MD))
        .push(iced::widget::horizontal_space())
        .push(
            button(icons::sized(icons::cross(), sizing::ICON_MD))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(styles::button::bare),
        );

    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(scan_surface(session));

    if let Some(payload) = session.result() {
        body = body.push(result_panel(payload));
    }

    Container::new(body)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal)
        .into()
}

fn scan_surface(session: &QrSession) -> Element<'_, Message> {
    match session.surface() {
        ScanSurface::Loading => Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new("Inizializzazione della fotocamera...").size(typography::BODY_LG))
            .push(
                Text::new("Assicurati di concedere i permessi per la fotocamera")
                    .size(typography::BODY_SM),
            )
            .into(),
        ScanSurface::Live => Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(icons::sized(icons::camera(), sizing::ICON_LG))
            .push(Text::new("Inquadra un QR code").size(typography::BODY_LG))
            .into(),
        ScanSurface::FileFallback { selected } => {
            let file_label = selected
                .as_ref()
                .and_then(|path| path.file_name())
                .map_or_else(
                    || "Nessuna immagine selezionata".to_string(),
                    |name| name.to_string_lossy().into_owned(),
                );

            Column::new()
                .spacing(spacing::SM)
                .push(Text::new("Scanner della fotocamera non disponibile.").size(typography::BODY))
                .push(
                    Text::new("Puoi provare a scansionare un QR code caricando un'immagine:")
                        .size(typography::BODY_SM),
                )
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(icons::sized(icons::image(), sizing::ICON_SM))
                        .push(Text::new(file_label).size(typography::BODY_SM)),
                )
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(
                            button(Text::new("Scegli immagine").size(typography::BODY_SM))
                                .on_press(Message::PickFile)
                                .padding(spacing::XS)
                                .style(styles::button::outline),
                        )
                        .push(
                            button(Text::new("Scansiona da File").size(typography::BODY_SM))
                                .on_press(Message::ScanFromFile)
                                .padding(spacing::XS)
                                .style(styles::button::primary),
                        ),
                )
                .into()
        }
    }
}

fn result_panel(payload: &QrPayload) -> Element<'_, Message> {
    let content: Element<'_, Message> = match payload {
        QrPayload::Url(url) => Column::new()
            .spacing(spacing::XS)
            .push(Text::new("QR Code rilevato!").size(typography::TITLE_SM))
            .push(Text::new(format!("Link trovato: {url}")).size(typography::BODY_SM))
            .push(
                button(
                    Row::new()
                        .spacing(spacing::XXS)
                        .align_y(Vertical::Center)
                        .push(icons::sized(icons::external_link(), sizing::ICON_SM))
                        .push(Text::new("Apri Link").size(typography::BODY_SM)),
                )
                .on_press(Message::OpenLink(url.clone()))
                .padding(spacing::XS)
                .style(styles::button::primary),
            )
            .into(),
        QrPayload::Raw(text) => Column::new()
            .spacing(spacing::XS)
            .push(Text::new("QR Code rilevato!").size(typography::TITLE_SM))
            .push(Text::new(format!("Contenuto: {text}")).size(typography::BODY))
            .into(),
        // Monument links close the session before rendering; nothing to show.
        QrPayload::Monument(id) => Text::new(format!("Monumento: {id}")).into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}
