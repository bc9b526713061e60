// SPDX-License-Identifier: MPL-2.0
//! QR capture and decode port.
//!
//! The scanner session only ever talks to this trait. The shipped adapter
//! ([`crate::infrastructure::qr::RqrrBackend`]) has no live camera and
//! reports [`QrError::CameraUnavailable`], which drives the session's file
//! fallback; tests exercise the live path through a fake implementation.

use futures_util::future::BoxFuture;
use std::fmt;
use std::path::PathBuf;

/// Errors produced by capture and decode operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// No live camera backend is available.
    CameraUnavailable,
    /// The frame or image contains no QR code. Not user-visible during live
    /// scanning; the decode loop keeps running.
    NoCode,
    /// The image could not be decoded.
    Decode(String),
    /// The image file could not be read.
    Io(String),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrError::CameraUnavailable => write!(f, "camera unavailable"),
            QrError::NoCode => write!(f, "no QR code found"),
            QrError::Decode(msg) => write!(f, "decode failed: {msg}"),
            QrError::Io(msg) => write!(f, "i/o error: {msg}"),
        }
    }
}

impl std::error::Error for QrError {}

/// Backend able to run a live scan session and decode picked images.
pub trait QrBackend: Send + Sync {
    /// Starts the live camera session; resolves once frames are flowing.
    fn start_live(&self) -> BoxFuture<'static, Result<(), QrError>>;

    /// Stops the live session. Best-effort: callers swallow failures.
    fn stop_live(&self) -> BoxFuture<'static, Result<(), QrError>>;

    /// Decodes a single image file into its QR payload text.
    fn decode_file(&self, path: PathBuf) -> BoxFuture<'static, Result<String, QrError>>;
}
