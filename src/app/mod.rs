// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sections.
//!
//! The `App` struct owns every explicit state object (active section,
//! accordion groups, filter, map, QR session, quiz, tour, notifications) and
//! translates messages into state transitions and side-effect tasks. The view
//! is a pure projection of this state; nothing is read back from the widgets.

mod message;
mod section;
mod subscription;
pub mod update;

pub use message::{Flags, Message};
pub use section::Section;

use crate::application::port::qr::QrBackend;
use crate::content::Catalog;
use crate::domain::filter::FilterState;
use crate::domain::map::MapViewState;
use crate::domain::panels::PanelGroup;
use crate::domain::qr::QrSession;
use crate::domain::quiz::QuizState;
use crate::domain::tour::TourState;
use crate::infrastructure::qr::RqrrBackend;
use crate::ui::notifications::{self, Notification, Toast};
use crate::ui::styles;
use crate::ui::{home, map_view, monuments, navbar, qr_modal, quiz_view, tour_view};
use iced::widget::{center, mouse_area, opaque, scrollable, Column, Id, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            Some(other) => {
                log::warn!("unknown theme flag: {other}");
                ThemeMode::System
            }
            None => ThemeMode::System,
        }
    }
}

/// Root application state.
pub struct App {
    section: Section,
    featured_panels: PanelGroup,
    monument_panels: PanelGroup,
    filter: FilterState,
    map: MapViewState,
    qr: QrSession,
    quiz: QuizState,
    tour: TourState,
    catalog: Catalog,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    fullscreen: bool,
    qr_backend: Arc<dyn QrBackend>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.section)
            .field("qr", &self.qr.state())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            section: Section::Home,
            featured_panels: PanelGroup::new(),
            monument_panels: PanelGroup::new(),
            filter: FilterState::new(),
            map: MapViewState::new(),
            qr: QrSession::new(),
            quiz: QuizState::new(),
            tour: TourState::new(),
            catalog: Catalog::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            fullscreen: false,
            qr_backend: Arc::new(RqrrBackend::new()),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();
        app.theme_mode = ThemeMode::from_flag(flags.theme.as_deref());

        match Catalog::load() {
            Ok(catalog) => app.catalog = catalog,
            Err(e) => {
                log::error!("embedded content failed to load: {e}");
                app.notifications.push(Notification::error(
                    "Errore nel caricamento dei contenuti",
                ));
            }
        }

        // Startup section: unknown ids leave the default untouched.
        if let Some(id) = flags.section.as_deref() {
            match Section::from_id(id) {
                Some(section) => {
                    app.section = section;
                    if section == Section::Map {
                        app.map.ensure_initialized(&app.catalog.locations);
                    }
                }
                None => log::warn!("unknown startup section: {id}"),
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.section {
            Section::Home => "Regalbuto Heritage".to_string(),
            section => format!("{} - Regalbuto Heritage", section.label()),
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => Theme::Dark,
                _ => Theme::Light,
            },
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.qr.is_open());
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.map.has_pending_timers(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            section: &mut self.section,
            featured_panels: &mut self.featured_panels,
            monument_panels: &mut self.monument_panels,
            filter: &mut self.filter,
            map: &mut self.map,
            qr: &mut self.qr,
            quiz: &mut self.quiz,
            tour: &mut self.tour,
            fullscreen: &mut self.fullscreen,
            catalog: &self.catalog,
            notifications: &mut self.notifications,
            qr_backend: &self.qr_backend,
        };

        match message {
            Message::Navbar(m) => update::handle_navbar_message(&mut ctx, m),
            Message::Home(m) => update::handle_home_message(&mut ctx, m),
            Message::Monuments(m) => update::handle_monuments_message(&mut ctx, m),
            Message::Map(m) => update::handle_map_message(&mut ctx, m),
            Message::Quiz(m) => update::handle_quiz_message(&mut ctx, m),
            Message::Tour(m) => update::handle_tour_message(&mut ctx, m),
            Message::Qr(m) => update::handle_qr_message(&mut ctx, m),
            Message::CaptureStarted(Ok(())) => {
                ctx.qr.capture_started();
                Task::none()
            }
            Message::CaptureStarted(Err(e)) => {
                // Expected on machines without a camera; the modal degrades
                // to the file fallback.
                log::info!("live capture unavailable: {e}");
                ctx.qr.capture_failed();
                Task::none()
            }
            Message::DecoderStopped => {
                ctx.qr.finish_close(Instant::now());
                Task::none()
            }
            Message::LiveDecode(text) => {
                if ctx.qr.is_open() {
                    update::handle_decoded(&mut ctx, &text)
                } else {
                    Task::none()
                }
            }
            Message::QrFilePicked(Some(path)) => {
                ctx.qr.select_file(path);
                Task::none()
            }
            Message::QrFilePicked(None) => Task::none(),
            Message::QrFileDecoded(Ok(text)) => {
                if ctx.qr.is_open() {
                    update::handle_decoded(&mut ctx, &text)
                } else {
                    Task::none()
                }
            }
            Message::QrFileDecoded(Err(e)) => {
                log::warn!("file decode failed: {e}");
                ctx.notifications.push(Notification::error(
                    "Impossibile leggere il QR code dall'immagine",
                ));
                Task::none()
            }
            Message::AudioGuideFinished(Ok(())) => Task::none(),
            Message::AudioGuideFinished(Err(e)) => {
                log::warn!("audio guide playback failed: {e}");
                ctx.notifications.push(Notification::warning(
                    "Audio guida non disponibile al momento",
                ));
                Task::none()
            }
            Message::ScrollToCategory(category) => update::handle_scroll_to_category(category),
            Message::FullscreenWindow(window_id) => {
                update::handle_fullscreen_window(&mut ctx, window_id)
            }
            Message::Notification(m) => {
                ctx.notifications.handle_message(&m);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick();
                ctx.map.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar_view = navbar::view(&navbar::ViewContext {
            active: self.section,
        })
        .map(Message::Navbar);

        let content: Element<'_, Message> = match self.section {
            Section::Home => home::view(home::ViewContext {
                catalog: &self.catalog,
                featured: &self.featured_panels,
            })
            .map(Message::Home),
            Section::Monuments => monuments::view(monuments::ViewContext {
                catalog: &self.catalog,
                filter: &self.filter,
                panels: &self.monument_panels,
            })
            .map(Message::Monuments),
            Section::Map => map_view::view(map_view::ViewContext {
                catalog: &self.catalog,
                filter: &self.filter,
                map: &self.map,
            })
            .map(Message::Map),
            Section::Quiz => quiz_view::view(quiz_view::ViewContext {
                catalog: &self.catalog,
                quiz: &self.quiz,
            })
            .map(Message::Quiz),
            Section::VirtualTour => tour_view::view(tour_view::ViewContext {
                catalog: &self.catalog,
                tour: &self.tour,
                fullscreen: self.fullscreen,
            })
            .map(Message::Tour),
        };

        let base = Column::new().push(navbar_view).push(
            scrollable(content)
                .id(Id::new(update::CONTENT_SCROLL_ID))
                .width(Length::Fill)
                .height(Length::Fill),
        );

        let mut layers = Stack::new().push(base);

        if self.qr.is_open() {
            let modal = qr_modal::view(&self.qr).map(Message::Qr);
            layers = layers.push(opaque(
                mouse_area(center(opaque(modal)).style(styles::container::backdrop))
                    .on_press(Message::Qr(qr_modal::Message::Close)),
            ));
        }

        layers = layers.push(Toast::view_overlay(&self.notifications).map(Message::Notification));
        layers.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::qr::QrError;
    use crate::content::{Category, Choice};
    use crate::domain::filter::CategoryFilter;
    use crate::domain::qr::{QrPayload, ScanSurface, SessionState};
    use crate::domain::quiz::{QuizStage, QUESTION_COUNT};
    use futures_util::future::BoxFuture;
    use std::path::PathBuf;

    /// Backend whose camera always starts; decodes are driven by messages.
    struct FakeLiveBackend;

    impl QrBackend for FakeLiveBackend {
        fn start_live(&self) -> BoxFuture<'static, Result<(), QrError>> {
            Box::pin(std::future::ready(Ok(())))
        }

        fn stop_live(&self) -> BoxFuture<'static, Result<(), QrError>> {
            Box::pin(std::future::ready(Ok(())))
        }

        fn decode_file(&self, _path: PathBuf) -> BoxFuture<'static, Result<String, QrError>> {
            Box::pin(std::future::ready(Err(QrError::NoCode)))
        }
    }

    fn app() -> App {
        let (app, _task) = App::new(Flags::default());
        app
    }

    fn notification_messages(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .map(|n| n.message().to_string())
            .collect()
    }

    fn select(app: &mut App, section: Section) {
        let _ = app.update(Message::Navbar(navbar::Message::SelectSection(section)));
    }

    #[test]
    fn new_starts_on_home_with_loaded_content() {
        let app = app();
        assert_eq!(app.section, Section::Home);
        assert_eq!(app.catalog.monuments.len(), 13);
        assert!(!app.qr.is_open());
    }

    #[test]
    fn startup_section_flag_selects_the_section() {
        let (app, _task) = App::new(Flags {
            section: Some("mappa".to_string()),
            theme: None,
        });
        assert_eq!(app.section, Section::Map);
        assert!(app.map.is_initialized());
    }

    #[test]
    fn unknown_startup_section_keeps_the_default() {
        let (app, _task) = App::new(Flags {
            section: Some("castello".to_string()),
            theme: None,
        });
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn exactly_one_section_is_active_after_every_switch() {
        let mut app = app();
        for section in Section::ALL {
            select(&mut app, section);
            assert_eq!(app.section, section);
        }
    }

    #[test]
    fn entering_the_map_section_initializes_it_once() {
        let mut app = app();
        assert!(!app.map.is_initialized());

        select(&mut app, Section::Map);
        assert!(app.map.is_initialized());
        assert_eq!(app.map.marker_count(), 7);
        let revision = app.map.viewport_revision();

        select(&mut app, Section::Home);
        select(&mut app, Section::Map);
        // Re-entry requests a redraw instead of rebuilding the map.
        assert_eq!(app.map.marker_count(), 7);
        assert!(app.map.viewport_revision() > revision);
    }

    #[test]
    fn switching_sections_force_closes_an_open_scanner() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        assert!(app.qr.is_open());

        select(&mut app, Section::Quiz);
        assert!(!app.qr.is_open());

        let _ = app.update(Message::DecoderStopped);
        assert_eq!(app.qr.state(), SessionState::Idle);
    }

    #[test]
    fn camera_failure_degrades_to_the_file_fallback() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        assert_eq!(app.qr.state(), SessionState::Requesting);

        let _ = app.update(Message::CaptureStarted(Err(QrError::CameraUnavailable)));
        assert!(app.qr.is_open());
        assert_eq!(app.qr.state(), SessionState::Idle);
        assert!(matches!(
            app.qr.surface(),
            ScanSurface::FileFallback { selected: None }
        ));
    }

    #[test]
    fn scan_from_file_without_a_selection_warns_and_keeps_state() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        let _ = app.update(Message::CaptureStarted(Err(QrError::CameraUnavailable)));

        let _ = app.update(Message::Qr(qr_modal::Message::ScanFromFile));
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("Seleziona un'immagine")));
        assert!(matches!(
            app.qr.surface(),
            ScanSurface::FileFallback { selected: None }
        ));
    }

    #[test]
    fn live_flow_reaches_scanning_with_a_granting_backend() {
        let mut app = app();
        app.qr_backend = Arc::new(FakeLiveBackend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        let _ = app.update(Message::CaptureStarted(Ok(())));
        assert_eq!(app.qr.state(), SessionState::Scanning);
        assert_eq!(*app.qr.surface(), ScanSurface::Live);
    }

    #[test]
    fn monument_deep_link_routes_into_the_directory() {
        let mut app = app();
        app.qr_backend = Arc::new(FakeLiveBackend);
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        let _ = app.update(Message::CaptureStarted(Ok(())));

        let _ = app.update(Message::LiveDecode("monument:san-basilio".to_string()));

        assert!(!app.qr.is_open());
        assert_eq!(app.section, Section::Monuments);
        assert!(app.monument_panels.is_expanded("san-basilio"));
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("san-basilio")));
    }

    #[test]
    fn url_payload_shows_the_open_link_affordance() {
        let mut app = app();
        app.qr_backend = Arc::new(FakeLiveBackend);
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        let _ = app.update(Message::CaptureStarted(Ok(())));

        let _ = app.update(Message::LiveDecode("https://example.com".to_string()));

        assert!(app.qr.is_open());
        assert_eq!(app.qr.state(), SessionState::Resolved);
        assert_eq!(
            app.qr.result(),
            Some(&QrPayload::Url("https://example.com".to_string()))
        );
    }

    #[test]
    fn raw_payload_is_displayed_verbatim() {
        let mut app = app();
        app.qr_backend = Arc::new(FakeLiveBackend);
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        let _ = app.update(Message::CaptureStarted(Ok(())));

        let _ = app.update(Message::LiveDecode("hello world".to_string()));
        assert_eq!(
            app.qr.result(),
            Some(&QrPayload::Raw("hello world".to_string()))
        );
    }

    #[test]
    fn double_close_produces_the_same_end_state_as_a_single_close() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));

        let _ = app.update(Message::Qr(qr_modal::Message::Close));
        let _ = app.update(Message::Qr(qr_modal::Message::Close));
        let _ = app.update(Message::DecoderStopped);

        assert!(!app.qr.is_open());
        assert_eq!(app.qr.state(), SessionState::Idle);
        assert!(app.qr.result().is_none());
    }

    #[test]
    fn failed_file_decode_reports_an_error_without_state_change() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        let _ = app.update(Message::CaptureStarted(Err(QrError::CameraUnavailable)));

        let _ = app.update(Message::QrFileDecoded(Err(QrError::Decode(
            "bad image".to_string(),
        ))));

        assert!(app.qr.is_open());
        assert_eq!(app.qr.state(), SessionState::Idle);
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("Impossibile leggere")));
    }

    #[test]
    fn picked_file_is_remembered_for_the_scan() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenScanner));
        let _ = app.update(Message::CaptureStarted(Err(QrError::CameraUnavailable)));

        let _ = app.update(Message::QrFilePicked(Some(PathBuf::from("/tmp/qr.png"))));
        assert_eq!(app.qr.selected_file(), Some(&PathBuf::from("/tmp/qr.png")));
    }

    #[test]
    fn search_and_category_combine_over_the_directory() {
        let mut app = app();
        let _ = app.update(Message::Monuments(monuments::Message::SearchChanged(
            "chiesa".to_string(),
        )));
        let count_search_only = app.filter.visible_count(&app.catalog.monuments);
        assert!(count_search_only > 0);

        let _ = app.update(Message::Monuments(monuments::Message::CategorySelected(
            CategoryFilter::Only(Category::Natura),
        )));
        assert_eq!(app.filter.visible_count(&app.catalog.monuments), 0);
    }

    #[test]
    fn category_with_no_locations_leaves_zero_markers_attached() {
        let mut app = app();
        select(&mut app, Section::Map);

        // No location entry carries the Religioso category.
        let _ = app.update(Message::Map(map_view::Message::CategorySelected(
            CategoryFilter::Only(Category::Religioso),
        )));
        assert_eq!(app.map.attached_count(), 0);

        let _ = app.update(Message::Map(map_view::Message::CategorySelected(
            CategoryFilter::All,
        )));
        assert_eq!(app.map.attached_count(), 7);
    }

    #[test]
    fn map_category_selection_raises_filter_feedback() {
        let mut app = app();
        select(&mut app, Section::Map);
        let _ = app.update(Message::Map(map_view::Message::CategorySelected(
            CategoryFilter::Only(Category::Natura),
        )));
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("Natura e Paesaggio")));
    }

    #[test]
    fn scroll_zoom_requires_a_prior_interaction() {
        let mut app = app();
        select(&mut app, Section::Map);
        let zoom_before = app.map.zoom();

        let _ = app.update(Message::Map(map_view::Message::Scrolled(1.0)));
        assert_eq!(app.map.zoom(), zoom_before);

        let _ = app.update(Message::Map(map_view::Message::MapPressed));
        let _ = app.update(Message::Map(map_view::Message::Scrolled(1.0)));
        assert!(app.map.zoom() > zoom_before);
    }

    #[test]
    fn quiz_next_without_answer_warns_and_stays() {
        let mut app = app();
        let _ = app.update(Message::Quiz(quiz_view::Message::Start));
        let _ = app.update(Message::Quiz(quiz_view::Message::Next));

        assert_eq!(app.quiz.current_question(), 1);
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("prima di continuare")));
    }

    #[test]
    fn answering_the_key_scores_ten() {
        let mut app = app();
        let _ = app.update(Message::Quiz(quiz_view::Message::Start));

        for question in 1..=QUESTION_COUNT {
            let correct = app
                .catalog
                .answer_key
                .correct(question)
                .expect("key entry");
            let _ = app.update(Message::Quiz(quiz_view::Message::Answer(question, correct)));
            if question < QUESTION_COUNT {
                let _ = app.update(Message::Quiz(quiz_view::Message::Next));
            }
        }
        let _ = app.update(Message::Quiz(quiz_view::Message::Submit));

        assert_eq!(app.quiz.stage(), QuizStage::Complete { score: 10 });
    }

    #[test]
    fn quiz_submit_without_final_answer_is_rejected() {
        let mut app = app();
        let _ = app.update(Message::Quiz(quiz_view::Message::Start));
        let _ = app.update(Message::Quiz(quiz_view::Message::Submit));

        assert_eq!(app.quiz.stage(), QuizStage::InProgress);
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("prima di inviare")));
    }

    #[test]
    fn quiz_restart_returns_to_the_intro() {
        let mut app = app();
        let _ = app.update(Message::Quiz(quiz_view::Message::Start));
        let _ = app.update(Message::Quiz(quiz_view::Message::Answer(1, Choice::B)));
        let _ = app.update(Message::Quiz(quiz_view::Message::Restart));

        assert_eq!(app.quiz.stage(), QuizStage::Intro);
        assert!(app.quiz.answer(1).is_none());
    }

    #[test]
    fn featured_cards_are_mutually_exclusive() {
        let mut app = app();
        let _ = app.update(Message::Home(home::Message::ToggleCard(
            "san-basilio".to_string(),
        )));
        let _ = app.update(Message::Home(home::Message::ToggleCard(
            "lago-pozzillo".to_string(),
        )));

        assert!(app.featured_panels.is_expanded("lago-pozzillo"));
        assert!(!app.featured_panels.is_expanded("san-basilio"));
    }

    #[test]
    fn start_tour_switches_to_the_virtual_tour() {
        let mut app = app();
        let _ = app.update(Message::Home(home::Message::StartTour));
        assert_eq!(app.section, Section::VirtualTour);
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("tour virtuale")));
    }

    #[test]
    fn tour_load_and_vr_toggle_work_through_messages() {
        let mut app = app();
        select(&mut app, Section::VirtualTour);

        let _ = app.update(Message::Tour(tour_view::Message::LoadLocation(
            "convento".to_string(),
        )));
        assert_eq!(app.tour.current_location(), Some("convento"));
        assert!(app.tour.vr_enabled());

        let _ = app.update(Message::Tour(tour_view::Message::ToggleVr));
        assert!(!app.tour.vr_enabled());
    }

    #[test]
    fn fullscreen_without_a_window_is_a_warning() {
        let mut app = app();
        let _ = app.update(Message::FullscreenWindow(None));
        assert!(!app.fullscreen);
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("schermo intero")));
    }

    #[test]
    fn audio_guide_failure_surfaces_as_a_warning() {
        let mut app = app();
        let _ = app.update(Message::AudioGuideFinished(Err("boom".to_string())));
        assert!(notification_messages(&app)
            .iter()
            .any(|m| m.contains("Audio guida")));
    }

    #[test]
    fn titles_name_the_active_section() {
        let mut app = app();
        assert_eq!(app.title(), "Regalbuto Heritage");
        select(&mut app, Section::Map);
        assert_eq!(app.title(), "Mappa - Regalbuto Heritage");
    }
}
