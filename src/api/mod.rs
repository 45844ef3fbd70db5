//! # API Module
//!
//! HTTP endpoints for the local server. Two surfaces share this module:
//!
//! - The OAuth callback used by the CLI `auth` command
//! - The JSON action endpoints under `setlistify serve`, which expose the
//!   pipeline to external callers (a web UI or a conversational agent) with
//!   plain JSON inputs and outputs
//!
//! ## Endpoints
//!
//! - [`health`] - status and version for monitoring
//! - [`login`] - redirect to the Spotify consent page with a `state` cookie
//! - [`callback`] / [`session_callback`] - authorization-code exchange for
//!   the CLI flow and the session flow respectively
//! - [`search_artist`] - `GET /api/searchArtist?q=` artist resolution
//! - [`setlist`] - `GET /api/setlist?artist=&shows=` deduplicated songs plus
//!   per-show metadata
//! - [`create_playlist`] - `POST /api/createPlaylist` playlist creation with
//!   the session's token, lazily refreshed
//!
//! ## Error Shape
//!
//! Handlers never panic on pipeline failures: every error is converted into
//! a `{"error": message}` body with a taxonomy-appropriate status code via
//! [`ApiError`].

use axum::{
    Json,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::Error;

mod artists;
mod callback;
mod health;
mod login;
mod playlist;
mod setlist;

pub use artists::search_artist;
pub use callback::callback;
pub use callback::session_callback;
pub use health::health;
pub use login::login;
pub use playlist::create_playlist;
pub use setlist::setlist;

/// Boundary error: either a malformed request or a pipeline failure.
///
/// Both render as a structured `{"error": ...}` object so callers never have
/// to deal with exceptions or opaque bodies.
pub enum ApiError {
    BadRequest(String),
    Pipeline(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Pipeline(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Pipeline(err) => {
                let status = match &err {
                    Error::NotFound(_) => StatusCode::NOT_FOUND,
                    Error::Auth(_) => StatusCode::UNAUTHORIZED,
                    Error::Transport(_) | Error::Upstream(_) => StatusCode::BAD_GATEWAY,
                };
                (status, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Reads one cookie value out of a request's `Cookie` header.
pub(crate) fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
