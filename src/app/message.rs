// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::qr::QrError;
use crate::content::Category;
use crate::ui::home;
use crate::ui::map_view;
use crate::ui::monuments;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::qr_modal;
use crate::ui::quiz_view;
use crate::ui::tour_view;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Monuments(monuments::Message),
    Map(map_view::Message),
    Quiz(quiz_view::Message),
    Tour(tour_view::Message),
    Qr(qr_modal::Message),
    Notification(notifications::NotificationMessage),
    /// Outcome of the camera start request.
    CaptureStarted(Result<(), QrError>),
    /// The best-effort decoder stop settled (success or failure alike).
    DecoderStopped,
    /// A live decode callback fired with decoded text.
    LiveDecode(String),
    /// Result of the image picker for the QR file fallback.
    QrFilePicked(Option<PathBuf>),
    /// Result of decoding a picked image.
    QrFileDecoded(Result<String, QrError>),
    /// Audio guide playback finished or failed to start.
    AudioGuideFinished(Result<(), String>),
    /// Deferred scroll to a category group after a filter change.
    ScrollToCategory(Category),
    /// Window handle lookup result for the fullscreen request.
    FullscreenWindow(Option<iced::window::Id>),
    /// Periodic tick for notification auto-dismiss and map timers.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional startup section id (e.g. `mappa`). Unknown ids are ignored.
    pub section: Option<String>,
    /// Optional theme override: `light` or `dark`.
    pub theme: Option<String>,
}
