use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A Spotify OAuth token pair with its client-side expiry bookkeeping.
///
/// `obtained_at` is the unix timestamp at which the token was acquired; the
/// token is considered expired once `now >= obtained_at + expires_in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Builds a token from an authorization-code exchange response.
    pub fn from_response(response: TokenResponse, obtained_at: u64) -> Self {
        Token {
            access_token: response.access_token,
            refresh_token: response.refresh_token.unwrap_or_default(),
            scope: response.scope.unwrap_or_default(),
            expires_in: response.expires_in,
            obtained_at,
        }
    }

    /// Builds the successor token after a refresh grant.
    ///
    /// The provider may omit `refresh_token` in a refresh response; the prior
    /// refresh token is retained unchanged in that case.
    pub fn merged_refresh(&self, response: TokenResponse, obtained_at: u64) -> Self {
        Token {
            access_token: response.access_token,
            refresh_token: response
                .refresh_token
                .unwrap_or_else(|| self.refresh_token.clone()),
            scope: response.scope.unwrap_or_else(|| self.scope.clone()),
            expires_in: response.expires_in,
            obtained_at,
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.obtained_at + self.expires_in
    }
}

/// Body of a successful response from the Spotify token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    pub expires_in: u64,
}

/// Error body of the Spotify token endpoint (RFC 6749 shape).
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// In-flight authorization attempt shared between the CLI `auth` command and
/// the local callback handler.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub state: String,
    pub token: Option<Token>,
}

/// An artist as returned by the setlist.fm artist search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub mbid: String,
    pub name: String,
    #[serde(default)]
    pub disambiguation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub artist: Vec<Artist>,
}

/// Raw setlist.fm response for `/artist/{mbid}/setlists`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlistsResponse {
    #[serde(default)]
    pub setlist: Vec<SetlistNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetlistNode {
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub sets: Sets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<City>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: Option<String>,
}

/// The `sets` container groups the main set and any encores; song order
/// within and across blocks is performance order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sets {
    #[serde(default)]
    pub set: Vec<SetBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetBlock {
    #[serde(default)]
    pub song: Vec<SongNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongNode {
    #[serde(default)]
    pub name: Option<String>,
}

/// One show, flattened from the provider's nested setlist structure.
///
/// Immutable snapshot; `songs` carries all set blocks in order with untitled
/// entries skipped. A show with no songs is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub artist: String,
    pub event_date: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub url: Option<String>,
    pub songs: Vec<String>,
}

/// Body of `GET /me` on the Spotify Web API.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    pub uri: String,
    pub name: String,
}

/// A matched (title, track URI) pair produced by the track matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMatch {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

/// Error body returned by the Spotify Web API resource endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyErrorResponse {
    pub error: SpotifyErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyErrorBody {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

/// Outcome of a playlist creation run. Output only, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub url: String,
    pub name: String,
    pub songs_added: usize,
    pub matched_titles: Vec<String>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub mbid: String,
    pub disambiguation: String,
}

#[derive(Tabled)]
pub struct SongTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
}
