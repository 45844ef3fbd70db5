use axum::{Json, extract::Query};
use serde::Deserialize;

use crate::{api::ApiError, setlistfm, types::Artist};

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/searchArtist?q=` — resolves a free-text name to the matching
/// artists, relevance-sorted.
pub async fn search_artist(
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Artist>>, ApiError> {
    if params.q.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter 'q' is required".to_string(),
        ));
    }

    let artists = setlistfm::artists::search_artists(&params.q).await?;
    Ok(Json(artists))
}
