use setlistify::spotify::tracks::{scoped_query, unscoped_query};
use setlistify::types::{Token, TokenResponse, TrackSearchResponse};

fn create_test_token() -> Token {
    Token {
        access_token: "access-1".to_string(),
        refresh_token: "refresh-1".to_string(),
        scope: "playlist-modify-private".to_string(),
        expires_in: 3600,
        obtained_at: 1_000_000,
    }
}

#[test]
fn test_scoped_query_includes_artist() {
    assert_eq!(
        scoped_query("Karma Police", "Radiohead"),
        "track:Karma Police artist:Radiohead"
    );
}

#[test]
fn test_unscoped_query_drops_artist() {
    // The fallback drops the artist scope to catch cover versions
    assert_eq!(unscoped_query("Karma Police"), "track:Karma Police");
}

#[test]
fn test_token_is_expired_boundary() {
    let token = create_test_token();

    // expiry is obtained_at + expires_in
    assert!(!token.is_expired(1_000_000));
    assert!(!token.is_expired(1_003_599));
    assert!(token.is_expired(1_003_600));
    assert!(token.is_expired(1_003_601));
}

#[test]
fn test_token_from_response() {
    let response = TokenResponse {
        access_token: "access-2".to_string(),
        refresh_token: Some("refresh-2".to_string()),
        scope: Some("playlist-modify-private".to_string()),
        expires_in: 3600,
    };

    let token = Token::from_response(response, 42);

    assert_eq!(token.access_token, "access-2");
    assert_eq!(token.refresh_token, "refresh-2");
    assert_eq!(token.obtained_at, 42);
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_merged_refresh_retains_old_refresh_token() {
    let token = create_test_token();

    // The provider omitted refresh_token from the refresh response
    let response = TokenResponse {
        access_token: "access-2".to_string(),
        refresh_token: None,
        scope: None,
        expires_in: 3600,
    };

    let refreshed = token.merged_refresh(response, 2_000_000);

    assert_eq!(refreshed.access_token, "access-2");
    assert_eq!(refreshed.refresh_token, "refresh-1");
    assert_eq!(refreshed.scope, "playlist-modify-private");
    assert_eq!(refreshed.obtained_at, 2_000_000);
    assert!(!refreshed.is_expired(2_000_000));
}

#[test]
fn test_merged_refresh_rotates_refresh_token_when_present() {
    let token = create_test_token();

    let response = TokenResponse {
        access_token: "access-2".to_string(),
        refresh_token: Some("refresh-2".to_string()),
        scope: None,
        expires_in: 1800,
    };

    let refreshed = token.merged_refresh(response, 2_000_000);

    assert_eq!(refreshed.refresh_token, "refresh-2");
    assert_eq!(refreshed.expires_in, 1800);
}

#[test]
fn test_parse_token_response_without_refresh_token() {
    // Refresh-grant responses routinely omit refresh_token and scope
    let json = r#"{ "access_token": "access-2", "expires_in": 3600 }"#;
    let response: TokenResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.access_token, "access-2");
    assert_eq!(response.refresh_token, None);
    assert_eq!(response.scope, None);
}

#[test]
fn test_parse_track_search_response() {
    let json = r#"{
      "tracks": {
        "items": [
          { "uri": "spotify:track:63OQupATfueTdZMWTxW03A", "name": "Karma Police" }
        ]
      }
    }"#;

    let response: TrackSearchResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.tracks.items.len(), 1);
    assert_eq!(
        response.tracks.items[0].uri,
        "spotify:track:63OQupATfueTdZMWTxW03A"
    );
}

#[test]
fn test_parse_track_search_response_no_hits() {
    let json = r#"{ "tracks": { "items": [] } }"#;
    let response: TrackSearchResponse = serde_json::from_str(json).unwrap();

    assert!(response.tracks.items.is_empty());
}
