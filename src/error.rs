// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Embedded content (monuments, locations, quiz, tours) failed to parse.
    Content(String),
    /// An audio guide could not be fetched or played.
    Audio(String),
    /// Handing a URL to the system browser failed.
    External(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
            Error::External(e) => write!(f, "External Error: {}", e),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Content(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_content_error() {
        let err = Error::Content("bad field".to_string());
        assert_eq!(format!("{}", err), "Content Error: bad field");
    }

    #[test]
    fn from_toml_error_produces_content_variant() {
        let parse_result: std::result::Result<toml::Value, _> = toml::from_str("not [ valid");
        let err: Error = parse_result.unwrap_err().into();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn external_error_formats_properly() {
        let err = Error::External("no handler".into());
        assert_eq!(format!("{}", err), "External Error: no handler");
    }
}
