use axum::{Extension, Json, http::HeaderMap};
use serde::Deserialize;

use crate::{
    api::ApiError,
    error::Error,
    management::SessionStore,
    spotify,
    types::PlaylistResult,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistParams {
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub songs: Vec<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// `POST /api/createPlaylist` — creates a playlist from an already-extracted
/// song list using the session's token.
///
/// The token is refreshed lazily inside the session store (the updated value
/// is written back before the playlist call runs), so an expired session
/// token never reaches Spotify.
pub async fn create_playlist(
    headers: HeaderMap,
    Extension(sessions): Extension<SessionStore>,
    Json(params): Json<CreatePlaylistParams>,
) -> Result<Json<PlaylistResult>, ApiError> {
    if params.artist_name.trim().is_empty() || params.songs.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing artistName or songs in request body".to_string(),
        ));
    }

    let session_id = super::cookie_value(&headers, "sid")
        .ok_or_else(|| ApiError::Pipeline(Error::Auth("Login first".to_string())))?;

    let token = sessions.refresh_and_get(&session_id).await?;

    let result = spotify::playlist::create(
        &token.access_token,
        &params.artist_name,
        &params.songs,
        params.venue.as_deref(),
        params.date.as_deref(),
    )
    .await?;

    Ok(Json(result))
}
