use crate::{
    config,
    error::Result,
    types::{TrackItem, TrackMatch, TrackSearchResponse},
};

/// Search query scoped to the performing artist, the primary lookup.
pub fn scoped_query(title: &str, artist: &str) -> String {
    format!("track:{title} artist:{artist}")
}

/// Title-only query used as the fallback; catches cover versions recorded
/// under a different performer.
pub fn unscoped_query(title: &str) -> String {
    format!("track:{title}")
}

/// Runs one catalog search and returns the top hit, if any.
pub async fn search_track(access_token: &str, query: &str) -> Result<Option<TrackItem>> {
    let client = super::client()?;
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "track"), ("limit", "1")])
        .bearer_auth(access_token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(super::upstream_error(response).await);
    }

    let res = response.json::<TrackSearchResponse>().await?;
    Ok(res.tracks.items.into_iter().next())
}

/// Matches song titles to track URIs, preserving input order.
///
/// For each title the artist-scoped query runs first; on zero hits the
/// unscoped fallback runs. A title that matches nothing in either lookup is
/// silently absent from the output — a soft skip, not an error.
pub async fn match_tracks(
    access_token: &str,
    artist: &str,
    titles: &[String],
) -> Result<Vec<TrackMatch>> {
    let mut matches = Vec::new();

    for title in titles {
        let hit = match search_track(access_token, &scoped_query(title, artist)).await? {
            Some(item) => Some(item),
            None => search_track(access_token, &unscoped_query(title)).await?,
        };

        if let Some(item) = hit {
            matches.push(TrackMatch {
                title: title.clone(),
                uri: item.uri,
            });
        }
    }

    Ok(matches)
}
