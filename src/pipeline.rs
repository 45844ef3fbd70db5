//! End-to-end composition of the setlist-to-playlist steps.
//!
//! Each function passes its state forward through arguments and return
//! values — there is no shared mutable state, so concurrent invocations are
//! independent. The sequence is: artist resolution → show lookup → song
//! de-duplication → track matching → playlist creation.

use crate::{
    error::Result,
    setlistfm,
    spotify,
    types::{Artist, PlaylistResult, Show},
    utils,
};

/// Resolves a free-text band name to its best-matching artist.
///
/// Takes the first entry of the relevance-sorted search result.
pub async fn resolve_artist(name: &str) -> Result<Artist> {
    let mut artists = setlistfm::artists::search_artists(name).await?;
    // search_artists guarantees a non-empty result
    Ok(artists.remove(0))
}

/// Resolves the artist and fetches their `count` most recent shows.
pub async fn latest_shows(name: &str, count: usize) -> Result<(Artist, Vec<Show>)> {
    let artist = resolve_artist(name).await?;
    let shows = setlistfm::setlists::latest_shows(&artist, count).await?;
    Ok((artist, shows))
}

/// Runs the whole pipeline: recent shows in, created playlist out.
///
/// The playlist is titled after the newest show's venue and date when
/// available. The caller supplies a fresh access token; token refresh is the
/// boundary layer's responsibility.
pub async fn build_playlist(
    access_token: &str,
    artist_name: &str,
    count: usize,
) -> Result<PlaylistResult> {
    let (artist, shows) = latest_shows(artist_name, count).await?;
    let songs = utils::extract_setlist(&shows);

    let newest = shows.first();
    spotify::playlist::create(
        access_token,
        &artist.name,
        &songs,
        newest.and_then(|show| show.venue.as_deref()),
        newest.and_then(|show| show.event_date.as_deref()),
    )
    .await
}
