//! Error types shared by the catalog client and the playback core.

/// Failure talking to the beets web endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport or decode failure reported by reqwest
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),
}

/// Failure driving the page's media element.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    /// The browser refused to start playback (autoplay policy, aborted load, ...)
    #[error("playback start was rejected: {0}")]
    Rejected(String),

    /// No media element is attached to this page
    #[error("no media element is attached")]
    Unavailable,

    /// The platform media session refused the now-playing update
    #[error("media session update failed: {0}")]
    Session(String),
}
