//! Error taxonomy shared across the setlist-to-playlist pipeline.
//!
//! Every fallible pipeline operation returns [`Error`]; boundary layers (CLI
//! commands, HTTP handlers) are responsible for converting a failure into a
//! user-facing message or a structured `{"error": ...}` body instead of
//! letting it escape as a panic.

use thiserror::Error;

/// A convenient Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Artist or shows absent upstream. The message is already user-facing.
    #[error("{0}")]
    NotFound(String),

    /// Transport-level failure, surfaced after the fixed retry budget is
    /// exhausted.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Authorization-code or refresh-token exchange rejected by the token
    /// endpoint.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Playlist-service failure, wrapping the provider's error reason.
    #[error("spotify error: {0}")]
    Upstream(String),
}
