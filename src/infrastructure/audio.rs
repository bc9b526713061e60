// SPDX-License-Identifier: MPL-2.0
//! Audio guide playback.
//!
//! Guides are small hosted files: fetch the whole resource, then decode and
//! play it on a blocking task until it ends. Errors bubble up as strings for
//! the notification layer; playback is fire-and-forget with no cancellation.

use std::io::Cursor;

/// Fetches and plays an audio guide to completion.
pub async fn stream_guide(url: String) -> Result<(), String> {
    let bytes = fetch_guide(&url).await?;

    tokio::task::spawn_blocking(move || play_to_end(bytes))
        .await
        .map_err(|e| e.to_string())?
}

async fn fetch_guide(url: &str) -> Result<Vec<u8>, String> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("RegalbutoHeritage/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| e.to_string())?;

    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP status: {}", response.status()));
    }

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    if bytes.is_empty() {
        return Err("empty audio resource".to_string());
    }
    Ok(bytes.to_vec())
}

fn play_to_end(bytes: Vec<u8>) -> Result<(), String> {
    let (_stream, handle) = rodio::OutputStream::try_default().map_err(|e| e.to_string())?;
    let sink = rodio::Sink::try_new(&handle).map_err(|e| e.to_string())?;
    let source = rodio::Decoder::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecodable_bytes_report_an_error() {
        // No audio device is needed to fail decoding, but opening the output
        // stream may fail first on headless machines; both paths are errors.
        let result = play_to_end(vec![0u8; 16]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn invalid_url_reports_an_error() {
        let result = fetch_guide("http://127.0.0.1:1/guide.wav").await;
        assert!(result.is_err());
    }
}
