use reqwest::{StatusCode, header::ACCEPT};
use tokio::time::sleep;

use crate::{
    config,
    error::{Error, Result},
    types::{Artist, ArtistSearchResponse},
};

/// Searches the setlist.fm database for artists matching a free-text name.
///
/// Calls `GET /search/artists?artistName=<name>&p=1&sort=relevance` with the
/// configured API key; results come back in the provider's relevance order,
/// so the first entry is the best match. No fuzzy matching is done locally
/// beyond what the remote search provides.
///
/// # Errors
///
/// - `Error::NotFound` when the search yields zero results (the provider
///   signals this either with a 404 or an empty `artist` array)
/// - `Error::Transport` on network or HTTP failures
pub async fn search_artists(name: &str) -> Result<Vec<Artist>> {
    let client = super::client()?;
    let api_url = format!("{uri}/search/artists", uri = &config::setlistfm_apiurl());

    sleep(super::PACING).await;
    let response = client
        .get(&api_url)
        .query(&[("artistName", name), ("p", "1"), ("sort", "relevance")])
        .header("x-api-key", config::setlistfm_api_key())
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(Error::NotFound(format!("Artist '{name}' not found.")));
    }

    let res = response
        .error_for_status()?
        .json::<ArtistSearchResponse>()
        .await?;

    if res.artist.is_empty() {
        return Err(Error::NotFound(format!("Artist '{name}' not found.")));
    }

    Ok(res.artist)
}
