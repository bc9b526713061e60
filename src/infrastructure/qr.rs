// SPDX-License-Identifier: MPL-2.0
//! rqrr-based QR decoding adapter.
//!
//! Desktop builds ship without a camera integration: `start_live` reports
//! [`QrError::CameraUnavailable`] so the session degrades to the file
//! fallback. File decoding runs on a blocking task since grid detection is
//! CPU-bound.

use crate::application::port::qr::{QrBackend, QrError};
use futures_util::future::BoxFuture;
use std::path::PathBuf;

/// Default QR backend: file decoding via `rqrr`, no live camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrBackend;

impl RqrrBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl QrBackend for RqrrBackend {
    fn start_live(&self) -> BoxFuture<'static, Result<(), QrError>> {
        Box::pin(std::future::ready(Err(QrError::CameraUnavailable)))
    }

    fn stop_live(&self) -> BoxFuture<'static, Result<(), QrError>> {
        Box::pin(std::future::ready(Ok(())))
    }

    fn decode_file(&self, path: PathBuf) -> BoxFuture<'static, Result<String, QrError>> {
        Box::pin(async move {
            tokio::task::spawn_blocking(move || decode_image_file(&path))
                .await
                .map_err(|e| QrError::Decode(e.to_string()))?
        })
    }
}

/// Decodes the first QR grid found in an image file.
fn decode_image_file(path: &std::path::Path) -> Result<String, QrError> {
    let image = image_rs::open(path).map_err(|e| QrError::Io(e.to_string()))?;
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            gray.get_pixel(x as u32, y as u32).0[0]
        });
    let grids = prepared.detect_grids();
    let grid = grids.first().ok_or(QrError::NoCode)?;
    let (_meta, content) = grid.decode().map_err(|e| QrError::Decode(e.to_string()))?;
    Ok(content)
}
