//! Error types for the birthday page

use thiserror::Error;

/// Main error type for page operations
#[derive(Error, Debug)]
pub enum PageError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed or written as JSON
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config parsed but holds values the page cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Section name that is not one of greeting, gallery, message, wishes
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Host bridge (webview script channel) failed
    #[error("Bridge error: {0}")]
    Bridge(String),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;

/// Why an audio sink could not start playback.
///
/// None of these are fatal; the page falls back to the manual toggle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The host refused to start playback (typically autoplay policy)
    #[error("Playback blocked by host: {0}")]
    Blocked(String),

    /// The audio element is missing or its source failed to load
    #[error("Audio unavailable: {0}")]
    Unavailable(String),

    /// The sink was released during teardown
    #[error("Audio sink already released")]
    Released,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::UnknownSection("footer".to_string());
        assert_eq!(format!("{}", err), "Unknown section: footer");

        let err = PlaybackError::Blocked("NotAllowedError".to_string());
        assert_eq!(format!("{}", err), "Playback blocked by host: NotAllowedError");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let page_err: PageError = io_err.into();
        assert!(matches!(page_err, PageError::Io(_)));
    }
}
