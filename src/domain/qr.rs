// SPDX-License-Identifier: MPL-2.0
//! QR scanner session lifecycle.
//!
//! The session is a small state machine (`Idle → Requesting → Scanning →
//! Resolved`, any state `→ Closing → Idle`). The close path is the delicate
//! part: close requests arrive from several event sources (close button,
//! backdrop click, Escape, section switches) and may overlap, so overlapping
//! requests are rejected while a close is in flight and a short cooldown
//! absorbs duplicates from the same gesture after the session settles.

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long duplicate close requests are absorbed after a close completes.
/// Tunable; inherited from the source behavior's debounce window.
pub const CLOSE_GUARD_COOLDOWN: Duration = Duration::from_millis(500);

/// Marker prefix that turns a decoded payload into a monument deep link.
const MONUMENT_MARKER: &str = "monument:";

/// Lifecycle states of the scanner session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Requesting,
    Scanning,
    Resolved,
    Closing,
}

/// What the scan surface inside the modal is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanSurface {
    /// Camera is being requested.
    Loading,
    /// Live decode in progress.
    Live,
    /// Camera unavailable: decode a picked image instead.
    FileFallback { selected: Option<PathBuf> },
}

/// Classification of a decoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrPayload {
    /// An http(s) link, offered for opening externally.
    Url(String),
    /// A monument deep link (`monument:<id>`).
    Monument(String),
    /// Anything else, displayed verbatim.
    Raw(String),
}

impl QrPayload {
    /// Classifies decoded text into one of the three payload kinds.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.starts_with("http") {
            return QrPayload::Url(text.to_string());
        }
        if let Some(index) = text.find(MONUMENT_MARKER) {
            let id = text[index + MONUMENT_MARKER.len()..].trim();
            return QrPayload::Monument(id.to_string());
        }
        QrPayload::Raw(text.to_string())
    }
}

/// Outcome of a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The close began; the decoder must now be stopped asynchronously and
    /// [`QrSession::finish_close`] called when it settles.
    Begun,
    /// A close is already in flight; this request was rejected.
    InFlight,
    /// Nothing to close, or a duplicate within the cooldown window.
    Absorbed,
}

/// Outcome of an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOutcome {
    /// A previous scanner instance existed and must be torn down first.
    pub stop_previous: bool,
}

/// The single, process-wide scanner session.
#[derive(Debug, Clone)]
pub struct QrSession {
    open: bool,
    state: SessionState,
    surface: ScanSurface,
    result: Option<QrPayload>,
    cooldown_until: Option<Instant>,
}

impl Default for QrSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QrSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            state: SessionState::Idle,
            surface: ScanSurface::Loading,
            result: None,
            cooldown_until: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn surface(&self) -> &ScanSurface {
        &self.surface
    }

    #[must_use]
    pub fn result(&self) -> Option<&QrPayload> {
        self.result.as_ref()
    }

    /// Opens the modal and requests the capture backend. If a session is
    /// already open it is reset first and the previous scanner instance must
    /// be torn down.
    pub fn open(&mut self) -> OpenOutcome {
        let stop_previous = matches!(self.state, SessionState::Scanning);
        self.open = true;
        self.state = SessionState::Requesting;
        self.surface = ScanSurface::Loading;
        self.result = None;
        OpenOutcome { stop_previous }
    }

    /// The capture backend granted the camera and the decode loop began.
    pub fn capture_started(&mut self) {
        if self.state == SessionState::Requesting {
            self.state = SessionState::Scanning;
            self.surface = ScanSurface::Live;
        }
    }

    /// The capture backend failed to start: degrade to file-based decoding
    /// inside the still-open modal instead of failing outright.
    pub fn capture_failed(&mut self) {
        if self.state == SessionState::Requesting {
            self.state = SessionState::Idle;
            self.surface = ScanSurface::FileFallback { selected: None };
        }
    }

    /// Remembers the image picked for the file fallback.
    pub fn select_file(&mut self, path: PathBuf) {
        if let ScanSurface::FileFallback { selected } = &mut self.surface {
            *selected = Some(path);
        }
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&PathBuf> {
        match &self.surface {
            ScanSurface::FileFallback { selected } => selected.as_ref(),
            _ => None,
        }
    }

    /// A decode succeeded (live or from file): classify and move to Resolved.
    pub fn resolve(&mut self, text: &str) -> QrPayload {
        let payload = QrPayload::classify(text);
        self.state = SessionState::Resolved;
        self.result = Some(payload.clone());
        payload
    }

    /// Requests a close. Overlapping calls collapse into one effective close:
    /// a request while one is in flight is rejected, and requests inside the
    /// post-close cooldown are absorbed. On [`CloseOutcome::Begun`] the modal
    /// hides and both surfaces clear immediately; the caller stops the
    /// decoder (best-effort) and then calls [`Self::finish_close`].
    pub fn close(&mut self, now: Instant) -> CloseOutcome {
        if self.state == SessionState::Closing {
            return CloseOutcome::InFlight;
        }
        if let Some(until) = self.cooldown_until {
            if now < until {
                return CloseOutcome::Absorbed;
            }
        }
        if !self.open {
            return CloseOutcome::Absorbed;
        }

        self.open = false;
        self.state = SessionState::Closing;
        self.surface = ScanSurface::Loading;
        self.result = None;
        CloseOutcome::Begun
    }

    /// The asynchronous decoder stop settled (successfully or not); the
    /// session returns to Idle and the cooldown window opens.
    pub fn finish_close(&mut self, now: Instant) {
        if self.state == SessionState::Closing {
            self.state = SessionState::Idle;
            self.cooldown_until = Some(now + CLOSE_GUARD_COOLDOWN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognizes_urls() {
        assert_eq!(
            QrPayload::classify("https://example.com"),
            QrPayload::Url("https://example.com".to_string())
        );
        assert_eq!(
            QrPayload::classify("http://example.com"),
            QrPayload::Url("http://example.com".to_string())
        );
    }

    #[test]
    fn classify_recognizes_monument_links() {
        assert_eq!(
            QrPayload::classify("monument:san-basilio"),
            QrPayload::Monument("san-basilio".to_string())
        );
        assert_eq!(
            QrPayload::classify("visit monument: lago-pozzillo"),
            QrPayload::Monument("lago-pozzillo".to_string())
        );
    }

    #[test]
    fn classify_falls_back_to_raw_text() {
        assert_eq!(
            QrPayload::classify("hello world"),
            QrPayload::Raw("hello world".to_string())
        );
    }

    #[test]
    fn open_moves_to_requesting_with_loading_surface() {
        let mut session = QrSession::new();
        let outcome = session.open();
        assert!(!outcome.stop_previous);
        assert!(session.is_open());
        assert_eq!(session.state(), SessionState::Requesting);
        assert_eq!(*session.surface(), ScanSurface::Loading);
    }

    #[test]
    fn reopening_while_scanning_tears_down_the_previous_scanner() {
        let mut session = QrSession::new();
        session.open();
        session.capture_started();
        assert_eq!(session.state(), SessionState::Scanning);

        let outcome = session.open();
        assert!(outcome.stop_previous);
        assert_eq!(session.state(), SessionState::Requesting);
    }

    #[test]
    fn capture_failure_degrades_to_file_fallback() {
        let mut session = QrSession::new();
        session.open();
        session.capture_failed();
        assert!(session.is_open());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(matches!(
            session.surface(),
            ScanSurface::FileFallback { selected: None }
        ));
    }

    #[test]
    fn resolve_stores_the_classified_payload() {
        let mut session = QrSession::new();
        session.open();
        session.capture_started();
        let payload = session.resolve("https://example.com");
        assert_eq!(payload, QrPayload::Url("https://example.com".to_string()));
        assert_eq!(session.state(), SessionState::Resolved);
        assert_eq!(session.result(), Some(&payload));
    }

    #[test]
    fn close_hides_the_modal_and_clears_both_surfaces() {
        let now = Instant::now();
        let mut session = QrSession::new();
        session.open();
        session.capture_started();
        session.resolve("hello");

        assert_eq!(session.close(now), CloseOutcome::Begun);
        assert!(!session.is_open());
        assert_eq!(session.state(), SessionState::Closing);
        assert!(session.result().is_none());

        session.finish_close(now);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn overlapping_close_calls_collapse_into_one() {
        let now = Instant::now();
        let mut session = QrSession::new();
        session.open();

        assert_eq!(session.close(now), CloseOutcome::Begun);
        // Second close from another event source before the decoder stop
        // settles: rejected, no double teardown.
        assert_eq!(session.close(now), CloseOutcome::InFlight);

        session.finish_close(now);
        // A straggler from the same gesture lands inside the cooldown.
        assert_eq!(
            session.close(now + CLOSE_GUARD_COOLDOWN / 2),
            CloseOutcome::Absorbed
        );
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_open());
    }

    #[test]
    fn double_close_reaches_the_same_end_state_as_a_single_close() {
        let now = Instant::now();

        let mut once = QrSession::new();
        once.open();
        once.close(now);
        once.finish_close(now);

        let mut twice = QrSession::new();
        twice.open();
        twice.close(now);
        twice.close(now);
        twice.finish_close(now);

        assert_eq!(once.state(), twice.state());
        assert_eq!(once.is_open(), twice.is_open());
        assert_eq!(once.result(), twice.result());
    }

    #[test]
    fn closing_an_idle_session_is_absorbed() {
        let mut session = QrSession::new();
        assert_eq!(session.close(Instant::now()), CloseOutcome::Absorbed);
    }

    #[test]
    fn reopening_is_allowed_after_the_cooldown() {
        let now = Instant::now();
        let mut session = QrSession::new();
        session.open();
        session.close(now);
        session.finish_close(now);

        session.open();
        assert!(session.is_open());
        assert_eq!(session.close(now + CLOSE_GUARD_COOLDOWN), CloseOutcome::Begun);
    }

    #[test]
    fn file_selection_only_applies_in_fallback_mode() {
        let mut session = QrSession::new();
        session.open();
        session.select_file(PathBuf::from("/tmp/qr.png"));
        assert!(session.selected_file().is_none());

        session.capture_failed();
        session.select_file(PathBuf::from("/tmp/qr.png"));
        assert_eq!(
            session.selected_file(),
            Some(&PathBuf::from("/tmp/qr.png"))
        );
    }
}
