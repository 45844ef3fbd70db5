use crate::{
    config,
    error::Result,
    spotify::tracks,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUserResponse, PlaylistResult,
    },
    utils,
};

/// Service-imposed cap on URIs per track-add call.
pub const TRACKS_PER_REQUEST: usize = 100;

/// Looks up the id of the user the access token belongs to.
pub async fn current_user(access_token: &str) -> Result<String> {
    let client = super::client()?;
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let response = client.get(&api_url).bearer_auth(access_token).send().await?;

    if !response.status().is_success() {
        return Err(super::upstream_error(response).await);
    }

    let res = response.json::<CurrentUserResponse>().await?;
    Ok(res.id)
}

/// Creates a playlist from the given song titles and returns its public URL,
/// name and the count of tracks actually added.
///
/// Steps: resolve the authenticated user, match every title against the
/// catalog (see `tracks::match_tracks`), create a private playlist named via
/// `utils::playlist_name`, then add the matched URIs in batches of at most
/// [`TRACKS_PER_REQUEST`]. Titles that matched nothing are simply absent, so
/// `songs_added` may be smaller than the input list.
pub async fn create(
    access_token: &str,
    artist: &str,
    titles: &[String],
    venue: Option<&str>,
    date: Option<&str>,
) -> Result<PlaylistResult> {
    let user_id = current_user(access_token).await?;
    let matches = tracks::match_tracks(access_token, artist, titles).await?;

    let name = utils::playlist_name(artist, venue, date);
    let playlist = create_playlist(access_token, &user_id, &name, artist).await?;

    let uris: Vec<String> = matches.iter().map(|m| m.uri.clone()).collect();
    for chunk in uris.chunks(TRACKS_PER_REQUEST) {
        add_tracks(access_token, &playlist.id, chunk).await?;
    }

    Ok(PlaylistResult {
        url: playlist.external_urls.spotify,
        name: playlist.name,
        songs_added: uris.len(),
        matched_titles: matches.into_iter().map(|m| m.title).collect(),
    })
}

/// Creates an empty private playlist owned by the given user.
async fn create_playlist(
    access_token: &str,
    user_id: &str,
    name: &str,
    artist: &str,
) -> Result<CreatePlaylistResponse> {
    let client = super::client()?;
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let response = client
        .post(&api_url)
        .bearer_auth(access_token)
        .json(&CreatePlaylistRequest {
            name: name.to_string(),
            description: utils::playlist_description(artist),
            public: false,
            collaborative: false,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(super::upstream_error(response).await);
    }

    Ok(response.json::<CreatePlaylistResponse>().await?)
}

async fn add_tracks(access_token: &str, playlist_id: &str, uris: &[String]) -> Result<()> {
    let client = super::client()?;
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let response = client
        .post(&api_url)
        .bearer_auth(access_token)
        .json(&AddTracksRequest {
            uris: uris.to_vec(),
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(super::upstream_error(response).await);
    }

    response.json::<AddTracksResponse>().await?;
    Ok(())
}
