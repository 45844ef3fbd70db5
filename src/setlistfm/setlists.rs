use std::time::Duration;

use reqwest::{StatusCode, header::ACCEPT};
use tokio::time::sleep;

use crate::{
    config,
    error::{Error, Result},
    types::{Artist, SetlistNode, SetlistsResponse, Sets, Show},
};

const FETCH_ATTEMPTS: u32 = 3;
const RETRY_PAUSE: Duration = Duration::from_secs(1);

/// Fetches the most recent shows for a resolved artist.
///
/// Only the first page of `GET /artist/{mbid}/setlists` is requested — the
/// API returns setlists newest-first, so the page head already holds the
/// `count` most recent shows. The raw response is mapped through
/// [`shows_from_response`].
pub async fn latest_shows(artist: &Artist, count: usize) -> Result<Vec<Show>> {
    let response = fetch_setlists(artist).await?;
    shows_from_response(artist, response, count)
}

/// Performs the HTTP fetch with the fixed retry budget.
///
/// Transport failures and non-2xx statuses are both retried up to
/// [`FETCH_ATTEMPTS`] times with a fixed [`RETRY_PAUSE`] between attempts;
/// the final failure is terminal. A 404 means the artist page does not exist
/// and is reported as `NotFound` right away rather than burning retries.
async fn fetch_setlists(artist: &Artist) -> Result<SetlistsResponse> {
    let client = super::client()?;
    let api_url = format!(
        "{uri}/artist/{mbid}/setlists?p=1",
        uri = &config::setlistfm_apiurl(),
        mbid = artist.mbid
    );

    let mut attempt = 0;
    let response = loop {
        sleep(super::PACING).await;
        let result = client
            .get(&api_url)
            .header("x-api-key", config::setlistfm_api_key())
            .header(ACCEPT, "application/json")
            .send()
            .await;

        match result {
            Ok(resp) if resp.status() == StatusCode::NOT_FOUND => {
                return Err(Error::NotFound(format!(
                    "No shows found for artist '{}'.",
                    artist.name
                )));
            }
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => break valid_response,
                Err(err) => {
                    attempt += 1;
                    if attempt >= FETCH_ATTEMPTS {
                        return Err(Error::Transport(err));
                    }
                    sleep(RETRY_PAUSE).await;
                }
            },
            Err(err) => {
                attempt += 1;
                if attempt >= FETCH_ATTEMPTS {
                    return Err(Error::Transport(err));
                }
                sleep(RETRY_PAUSE).await;
            }
        }
    };

    Ok(response.json::<SetlistsResponse>().await?)
}

/// Maps a raw setlists response to the `count` most recent [`Show`]s.
///
/// Pure function, kept separate from the HTTP fetch so the mapping is
/// testable offline.
///
/// # Errors
///
/// `Error::NotFound` when the artist has zero recorded shows.
pub fn shows_from_response(
    artist: &Artist,
    response: SetlistsResponse,
    count: usize,
) -> Result<Vec<Show>> {
    if response.setlist.is_empty() {
        return Err(Error::NotFound(format!(
            "No shows found for artist '{}'.",
            artist.name
        )));
    }

    Ok(response
        .setlist
        .into_iter()
        .take(count)
        .map(|node| show_from_node(&artist.name, node))
        .collect())
}

fn show_from_node(artist: &str, node: SetlistNode) -> Show {
    let venue = node.venue;
    let city = venue.as_ref().and_then(|v| v.city.as_ref());

    Show {
        artist: artist.to_string(),
        event_date: node.event_date,
        venue: venue.as_ref().and_then(|v| v.name.clone()),
        city: city.and_then(|c| c.name.clone()),
        country: city
            .and_then(|c| c.country.as_ref())
            .and_then(|c| c.name.clone()),
        url: node.url,
        songs: flatten_songs(&node.sets),
    }
}

/// Collects all song titles across the main set and encores, in performance
/// order, skipping entries without a title.
pub fn flatten_songs(sets: &Sets) -> Vec<String> {
    sets.set
        .iter()
        .flat_map(|block| block.song.iter())
        .filter_map(|song| song.name.clone())
        .filter(|name| !name.is_empty())
        .collect()
}
