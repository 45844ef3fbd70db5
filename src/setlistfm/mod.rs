//! # setlist.fm Integration Module
//!
//! REST client for the setlist.fm database, covering the two endpoints the
//! pipeline needs:
//!
//! - [`artists`] - `GET /search/artists` for resolving a free-text band name
//!   to its MusicBrainz identifier (MBID)
//! - [`setlists`] - `GET /artist/{mbid}/setlists` for the artist's most
//!   recent shows, newest first
//!
//! ## Rate Limiting
//!
//! setlist.fm allows 2 requests per second on a standard API key. Rather than
//! a token bucket, every outgoing call is preceded by a fixed [`PACING`]
//! pause that keeps the client below that ceiling.
//!
//! ## Error Handling
//!
//! - Empty search results and artists without recorded shows surface as
//!   `Error::NotFound` with a user-facing message.
//! - The setlist fetch retries transport-level failures up to three times
//!   with a fixed one-second pause; the third failure is terminal and
//!   surfaces as `Error::Transport`.
//!
//! Authentication is a static `x-api-key` header read from the environment.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;

pub mod artists;
pub mod setlists;

/// Fixed pause before every setlist.fm call; keeps the client below the
/// provider's published ceiling of 2 requests per second.
pub(crate) const PACING: Duration = Duration::from_millis(600);

/// Per-call socket timeout.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn client() -> Result<Client> {
    Ok(Client::builder().timeout(HTTP_TIMEOUT).build()?)
}
