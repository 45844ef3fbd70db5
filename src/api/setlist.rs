use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};

use crate::{api::ApiError, pipeline, utils};

/// Cap on the song list returned to UI callers.
const SONG_CAP: usize = 50;

#[derive(Deserialize)]
pub struct SetlistParams {
    #[serde(default)]
    pub artist: String,
    #[serde(default = "default_shows")]
    pub shows: usize,
}

fn default_shows() -> usize {
    3
}

#[derive(Serialize)]
pub struct SetlistResponse {
    pub songs: Vec<String>,
    pub shows_meta: Vec<ShowMeta>,
}

#[derive(Serialize)]
pub struct ShowMeta {
    pub date: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
}

/// `GET /api/setlist?artist=&shows=` — recent shows flattened into a
/// de-duplicated song list plus per-show metadata.
pub async fn setlist(
    Query(params): Query<SetlistParams>,
) -> Result<Json<SetlistResponse>, ApiError> {
    if params.artist.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter 'artist' is required".to_string(),
        ));
    }

    let (_artist, shows) = pipeline::latest_shows(&params.artist, params.shows).await?;

    let mut songs = utils::extract_setlist(&shows);
    songs.truncate(SONG_CAP);

    let shows_meta = shows
        .iter()
        .map(|show| ShowMeta {
            date: show.event_date.clone(),
            venue: show.venue.clone(),
            city: show.city.clone(),
        })
        .collect();

    Ok(Json(SetlistResponse { songs, shows_meta }))
}
