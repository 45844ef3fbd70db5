//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API, implementing
//! authentication, track search and playlist management. It handles all HTTP
//! communication with Spotify, including the OAuth token endpoint.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow: consent URL construction,
//!   code exchange, refresh-token grant, and the interactive CLI flow with a
//!   local callback server
//! - [`tracks`] - Catalog search, matching song titles to track URIs with a
//!   cover-version fallback
//! - [`playlist`] - Current-user lookup, playlist creation and batched
//!   track adds
//!
//! ## Authentication Strategy
//!
//! The confidential-client authorization-code grant is used: the token
//! endpoint is called with HTTP Basic credentials (base64 of
//! `client_id:client_secret`) and an opaque `state` value protects the
//! redirect. Refresh is lazy — checked immediately before any authenticated
//! call, never in the background (see `management::TokenManager`).
//!
//! ## API Coverage
//!
//! - `POST {token endpoint}` - authorization-code and refresh-token grants
//! - `GET /me` - current user id
//! - `GET /search` - track search (`type=track&limit=1`)
//! - `POST /users/{user_id}/playlists` - create playlist
//! - `POST /playlists/{playlist_id}/tracks` - batch track add (≤100 per call)
//!
//! ## Error Handling
//!
//! Resource-endpoint failures are wrapped as `Error::Upstream` carrying the
//! provider's `error.message`; token-endpoint rejections become
//! `Error::Auth`. Callers receive structured errors, never panics.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::{error::Error, error::Result, types::SpotifyErrorResponse};

pub mod auth;
pub mod playlist;
pub mod tracks;

/// Per-call socket timeout.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn client() -> Result<Client> {
    Ok(Client::builder().timeout(HTTP_TIMEOUT).build()?)
}

/// Converts a non-2xx Web API response into `Error::Upstream`, preferring the
/// provider's own error message over the bare status code.
pub(crate) async fn upstream_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<SpotifyErrorResponse>().await {
        Ok(body) if !body.error.message.is_empty() => Error::Upstream(body.error.message),
        _ => Error::Upstream(format!("HTTP {status}")),
    }
}
