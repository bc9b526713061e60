// SPDX-License-Identifier: MPL-2.0
//! Hands URLs to the system browser (external maps, tour resources).

use crate::error::{Error, Result};

/// Opens `url` with the platform's default handler.
pub fn open_external(url: &str) -> Result<()> {
    open::that(url).map_err(|e| Error::External(e.to_string()))
}
