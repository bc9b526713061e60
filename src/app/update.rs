// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate explicit state through an [`UpdateContext`] and return
//! iced tasks for every asynchronous boundary (capture start, decoder stop,
//! file decode, audio fetch, dialogs). All tasks are fire-and-forget with
//! best-effort error capture; none are cancellable.

use super::{Message, Section};
use crate::application::port::qr::QrBackend;
use crate::content::{Catalog, Category};
use crate::domain::filter::{CategoryFilter, FilterState};
use crate::domain::map::MapViewState;
use crate::domain::panels::PanelGroup;
use crate::domain::qr::{CloseOutcome, QrPayload, QrSession};
use crate::domain::quiz::QuizState;
use crate::domain::tour::TourState;
use crate::infrastructure::{audio, links};
use crate::ui::monuments;
use crate::ui::notifications::{self, Notification};
use crate::ui::{home, map_view, navbar, qr_modal, quiz_view, tour_view};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Id of the scrollable hosting the section content.
pub const CONTENT_SCROLL_ID: &str = "content-scroll";

/// Delay before the deferred scroll to a filtered category group, giving the
/// visibility recompute a frame to settle. Tunable.
pub const SCROLL_AFTER_FILTER_DELAY: Duration = Duration::from_millis(300);

/// Delay before revealing a deep-linked monument panel, after the section
/// switch has reset the scroll position. Tunable.
pub const DEEP_LINK_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub section: &'a mut Section,
    pub featured_panels: &'a mut PanelGroup,
    pub monument_panels: &'a mut PanelGroup,
    pub filter: &'a mut FilterState,
    pub map: &'a mut MapViewState,
    pub qr: &'a mut QrSession,
    pub quiz: &'a mut QuizState,
    pub tour: &'a mut TourState,
    pub fullscreen: &'a mut bool,
    pub catalog: &'a Catalog,
    pub notifications: &'a mut notifications::Manager,
    pub qr_backend: &'a Arc<dyn QrBackend>,
}

/// Where a category selection originated; the directory schedules a deferred
/// scroll, the map raises filter feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategorySource {
    Directory,
    Map,
}

/// Switches the exclusively-active section. Navigating away always cancels
/// an in-progress scan, resets the content scroll, and realizes (or
/// refreshes) the map when it is the destination.
pub fn handle_section_switch(ctx: &mut UpdateContext<'_>, target: Section) -> Task<Message> {
    let mut tasks = Vec::new();

    if ctx.qr.is_open() {
        tasks.push(close_qr(ctx));
    }

    *ctx.section = target;
    tasks.push(operation::snap_to(
        Id::new(CONTENT_SCROLL_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    ));

    if target == Section::Map {
        if ctx.map.ensure_initialized(&ctx.catalog.locations) {
            // Markers must agree with a filter selected before first entry.
            ctx.map.apply_category_filter(ctx.filter.active_category());
        } else {
            // The container was hidden while the section was inactive.
            ctx.map.invalidate_viewport();
        }
    }

    Task::batch(tasks)
}

/// Handles navbar events.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::SelectSection(section) => handle_section_switch(ctx, section),
        navbar::Event::OpenScanner => handle_open_scanner(ctx),
    }
}

/// Handles home section messages.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match message {
        home::Message::ToggleCard(id) => {
            ctx.featured_panels.toggle(&id);
            Task::none()
        }
        home::Message::StartTour => {
            let task = handle_section_switch(ctx, Section::VirtualTour);
            ctx.notifications.push(Notification::success(
                "Benvenuto nel tour virtuale di Regalbuto!",
            ));
            task
        }
    }
}

/// Handles monument directory messages.
pub fn handle_monuments_message(
    ctx: &mut UpdateContext<'_>,
    message: monuments::Message,
) -> Task<Message> {
    match message {
        monuments::Message::SearchChanged(text) => {
            ctx.filter.set_search_text(text);
            Task::none()
        }
        monuments::Message::CategorySelected(filter) => {
            set_category(ctx, filter, CategorySource::Directory)
        }
        monuments::Message::TogglePanel(id) => {
            ctx.monument_panels.toggle(&id);
            Task::none()
        }
        monuments::Message::PlayGuide(id) => handle_play_guide(ctx, &id),
    }
}

/// Handles map section messages.
pub fn handle_map_message(
    ctx: &mut UpdateContext<'_>,
    message: map_view::Message,
) -> Task<Message> {
    match message {
        map_view::Message::CategorySelected(filter) => {
            set_category(ctx, filter, CategorySource::Map)
        }
        map_view::Message::MapPressed => {
            ctx.map.notice_interaction(Instant::now());
            Task::none()
        }
        map_view::Message::Scrolled(lines) => {
            if ctx.map.scroll_zoom_enabled() {
                ctx.map.zoom_by(f64::from(lines) * 0.5);
            }
            Task::none()
        }
        map_view::Message::ZoomIn => {
            ctx.map.notice_interaction(Instant::now());
            ctx.map.zoom_by(1.0);
            Task::none()
        }
        map_view::Message::ZoomOut => {
            ctx.map.notice_interaction(Instant::now());
            ctx.map.zoom_by(-1.0);
            Task::none()
        }
        map_view::Message::MarkerSelected(id) => {
            if !ctx.map.select_marker(&id) {
                log::warn!("marker not on the map: {id}");
            }
            Task::none()
        }
        map_view::Message::ClosePopup => {
            ctx.map.close_popup();
            Task::none()
        }
        map_view::Message::OpenInMaps(id) => {
            let url = ctx.catalog.maps_url_for(&id);
            match links::open_external(url) {
                Ok(()) => {
                    ctx.notifications
                        .push(Notification::info("Apertura Google Maps..."));
                }
                Err(e) => {
                    log::warn!("failed to open maps link: {e}");
                    ctx.notifications.push(Notification::warning(
                        "Impossibile aprire la mappa esterna",
                    ));
                }
            }
            Task::none()
        }
    }
}

/// Applies a category selection from either control group: the shared filter
/// state updates, markers re-sync, and the source-specific side effect runs.
fn set_category(
    ctx: &mut UpdateContext<'_>,
    filter: CategoryFilter,
    source: CategorySource,
) -> Task<Message> {
    ctx.filter.set_category(filter);
    ctx.map.apply_category_filter(filter);

    match source {
        CategorySource::Directory => {
            if let CategoryFilter::Only(category) = filter {
                Task::perform(
                    async move {
                        tokio::time::sleep(SCROLL_AFTER_FILTER_DELAY).await;
                        category
                    },
                    Message::ScrollToCategory,
                )
            } else {
                Task::none()
            }
        }
        CategorySource::Map => {
            ctx.notifications.push(Notification::success(format!(
                "Filtro applicato: {}",
                filter.display_name()
            )));
            Task::none()
        }
    }
}

/// Deferred scroll fired by [`set_category`]. A superseding section switch
/// simply makes this a harmless no-op on an unrelated scroll position.
pub fn handle_scroll_to_category(category: Category) -> Task<Message> {
    operation::snap_to(
        Id::new(CONTENT_SCROLL_ID),
        RelativeOffset {
            x: 0.0,
            y: monuments::category_scroll_offset(category),
        },
    )
}

/// Handles quiz messages.
pub fn handle_quiz_message(
    ctx: &mut UpdateContext<'_>,
    message: quiz_view::Message,
) -> Task<Message> {
    match message {
        quiz_view::Message::Start => {
            ctx.quiz.start();
            ctx.notifications
                .push(Notification::info("Quiz avviato! Buona fortuna!"));
        }
        quiz_view::Message::Answer(question, choice) => {
            ctx.quiz.select(question, choice);
        }
        quiz_view::Message::Next => {
            if ctx.quiz.next().is_err() {
                ctx.notifications.push(Notification::warning(
                    "Seleziona una risposta prima di continuare",
                ));
            }
        }
        quiz_view::Message::Previous => {
            ctx.quiz.previous();
        }
        quiz_view::Message::Submit => {
            if ctx.quiz.submit(&ctx.catalog.answer_key).is_err() {
                ctx.notifications.push(Notification::warning(
                    "Seleziona una risposta prima di inviare",
                ));
            }
        }
        quiz_view::Message::Restart => {
            ctx.quiz.restart();
            ctx.notifications.push(Notification::info("Quiz riavviato!"));
        }
    }
    Task::none()
}

/// Handles virtual tour messages.
pub fn handle_tour_message(
    ctx: &mut UpdateContext<'_>,
    message: tour_view::Message,
) -> Task<Message> {
    match message {
        tour_view::Message::LoadLocation(id) => {
            match ctx.tour.load_location(&id, &ctx.catalog.tours) {
                Some(name) => {
                    ctx.notifications
                        .push(Notification::info(format!("Caricamento {name}...")));
                }
                None => log::warn!("unknown tour location: {id}"),
            }
            Task::none()
        }
        tour_view::Message::ToggleVr => {
            match ctx.tour.toggle_vr_mode() {
                Some(true) => {
                    ctx.notifications.push(Notification::success(
                        "Modalità VR attivata! Cerca l'icona VR nel tour.",
                    ));
                }
                Some(false) => {
                    ctx.notifications
                        .push(Notification::info("Modalità VR disattivata"));
                }
                None => {
                    ctx.notifications.push(Notification::warning(
                        "Modalità VR non disponibile per questo panorama",
                    ));
                }
            }
            Task::none()
        }
        tour_view::Message::ToggleFullscreen => {
            window::get_latest().map(Message::FullscreenWindow)
        }
        tour_view::Message::ResetView => {
            if ctx.tour.reset_view() {
                ctx.notifications
                    .push(Notification::info("Vista ripristinata"));
            }
            Task::none()
        }
        tour_view::Message::OpenInBrowser => {
            if let Some(url) = ctx.tour.resource_url() {
                if let Err(e) = links::open_external(url) {
                    log::warn!("failed to open tour resource: {e}");
                    ctx.notifications.push(Notification::warning(
                        "Impossibile aprire il tour nel browser",
                    ));
                }
            }
            Task::none()
        }
    }
}

/// Completes the fullscreen request once the window handle is known.
/// Denials are warnings, never fatal.
pub fn handle_fullscreen_window(
    ctx: &mut UpdateContext<'_>,
    window_id: Option<window::Id>,
) -> Task<Message> {
    let Some(window_id) = window_id else {
        ctx.notifications.push(Notification::warning(
            "Impossibile attivare schermo intero",
        ));
        return Task::none();
    };

    *ctx.fullscreen = !*ctx.fullscreen;
    let mode = if *ctx.fullscreen {
        ctx.notifications
            .push(Notification::info("Modalità schermo intero attivata"));
        window::Mode::Fullscreen
    } else {
        ctx.notifications
            .push(Notification::info("Schermo intero disattivato"));
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}

/// Opens the scanner session: any previous scanner instance is torn down
/// first, then the capture backend is asked to start.
pub fn handle_open_scanner(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let outcome = ctx.qr.open();

    let stop_task = if outcome.stop_previous {
        stop_decoder(ctx.qr_backend)
    } else {
        Task::none()
    };

    let backend = ctx.qr_backend.clone();
    let start_task = Task::perform(
        async move { backend.start_live().await },
        Message::CaptureStarted,
    );

    Task::batch([stop_task, start_task])
}

/// Handles modal-level QR messages.
pub fn handle_qr_message(
    ctx: &mut UpdateContext<'_>,
    message: qr_modal::Message,
) -> Task<Message> {
    match message {
        qr_modal::Message::Close => close_qr(ctx),
        qr_modal::Message::PickFile => Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .add_filter("Immagini", &["png", "jpg", "jpeg", "bmp", "webp"])
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::QrFilePicked,
        ),
        qr_modal::Message::ScanFromFile => match ctx.qr.selected_file().cloned() {
            Some(path) => {
                let backend = ctx.qr_backend.clone();
                Task::perform(
                    async move { backend.decode_file(path).await },
                    Message::QrFileDecoded,
                )
            }
            None => {
                ctx.notifications.push(Notification::warning(
                    "Seleziona un'immagine da scansionare",
                ));
                Task::none()
            }
        },
        qr_modal::Message::OpenLink(url) => {
            if let Err(e) = links::open_external(&url) {
                log::warn!("failed to open decoded link: {e}");
                ctx.notifications
                    .push(Notification::warning("Impossibile aprire il link"));
            }
            Task::none()
        }
    }
}

/// Routes a successful decode (live or file) through payload classification.
pub fn handle_decoded(ctx: &mut UpdateContext<'_>, text: &str) -> Task<Message> {
    let payload = ctx.qr.resolve(text);
    match payload {
        QrPayload::Monument(id) => {
            // Deep link: close the session and drive the directory.
            let mut tasks = vec![close_qr(ctx)];
            tasks.push(handle_section_switch(ctx, Section::Monuments));

            if let Some(category) = ctx.catalog.monument(&id).map(|m| m.category) {
                ctx.monument_panels.expand(&id);
                tasks.push(handle_play_guide(ctx, &id));
                // Reveal the expanded panel once the section switch settled.
                tasks.push(Task::perform(
                    async move {
                        tokio::time::sleep(DEEP_LINK_REVEAL_DELAY).await;
                        category
                    },
                    Message::ScrollToCategory,
                ));
                ctx.notifications.push(Notification::success(format!(
                    "Monumento {id} aperto con audio guida!"
                )));
            } else {
                log::warn!("decoded deep link for unknown monument: {id}");
                ctx.notifications
                    .push(Notification::warning("Monumento non riconosciuto"));
            }
            Task::batch(tasks)
        }
        QrPayload::Url(_) | QrPayload::Raw(_) => {
            ctx.notifications
                .push(Notification::success("QR Code scansionato con successo!"));
            // The live loop is no longer needed once a result is shown.
            stop_decoder(ctx.qr_backend)
        }
    }
}

/// Closes the QR session. Overlapping requests collapse into a single
/// effective close; the decoder stop is asynchronous and best-effort.
pub fn close_qr(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.qr.close(Instant::now()) {
        CloseOutcome::Begun => stop_decoder(ctx.qr_backend),
        CloseOutcome::InFlight | CloseOutcome::Absorbed => Task::none(),
    }
}

/// Stops the live decoder, swallowing failures.
fn stop_decoder(backend: &Arc<dyn QrBackend>) -> Task<Message> {
    let backend = backend.clone();
    Task::perform(
        async move {
            if let Err(e) = backend.stop_live().await {
                log::debug!("decoder stop failed (ignored): {e}");
            }
        },
        |()| Message::DecoderStopped,
    )
}

/// Starts audio guide playback for a monument.
pub fn handle_play_guide(ctx: &mut UpdateContext<'_>, monument_id: &str) -> Task<Message> {
    let guide = ctx
        .catalog
        .monument(monument_id)
        .and_then(|m| m.audio_guide.clone());

    let Some(url) = guide else {
        ctx.notifications.push(Notification::warning(
            "Audio guida non disponibile per questo monumento",
        ));
        return Task::none();
    };

    ctx.notifications.push(Notification::info(
        "Riproduzione audio guida in corso...",
    ));
    Task::perform(audio::stream_guide(url), Message::AudioGuideFinished)
}
