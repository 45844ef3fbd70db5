use setlistify::error::Error;
use setlistify::setlistfm::setlists::{flatten_songs, shows_from_response};
use setlistify::types::{Artist, ArtistSearchResponse, SetlistsResponse};

fn create_test_artist() -> Artist {
    Artist {
        mbid: "a74b1b7f-71a5-4011-9441-d0b5e4122711".to_string(),
        name: "Radiohead".to_string(),
        disambiguation: String::new(),
    }
}

// A realistic slice of the provider's nested setlist JSON: one show with a
// main set and an encore, one song without a title.
const SETLISTS_JSON: &str = r#"{
  "setlist": [
    {
      "eventDate": "01-07-2025",
      "url": "https://www.setlist.fm/setlist/example",
      "venue": {
        "name": "Wembley Stadium",
        "city": {
          "name": "London",
          "country": { "name": "United Kingdom" }
        }
      },
      "sets": {
        "set": [
          { "song": [ { "name": "Airbag" }, { "name": "Paranoid Android" }, {} ] },
          { "song": [ { "name": "Karma Police" } ] }
        ]
      }
    },
    {
      "eventDate": "28-06-2025",
      "venue": { "name": "Slane Castle", "city": { "name": "Slane" } },
      "sets": { "set": [ { "song": [ { "name": "Airbag" }, { "name": "Creep" } ] } ] }
    }
  ]
}"#;

#[test]
fn test_parse_artist_search_response() {
    let json = r#"{
      "artist": [
        { "mbid": "a74b1b7f-71a5-4011-9441-d0b5e4122711", "name": "Radiohead" },
        { "mbid": "0d2356b5-5c22-4c3c-9f0c-6b8b2c5e8a7a", "name": "Radiohead Tribute", "disambiguation": "tribute band" }
      ]
    }"#;

    let response: ArtistSearchResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.artist.len(), 2);
    assert_eq!(response.artist[0].name, "Radiohead");
    // disambiguation is optional and defaults to empty
    assert_eq!(response.artist[0].disambiguation, "");
    assert_eq!(response.artist[1].disambiguation, "tribute band");
}

#[test]
fn test_parse_empty_artist_search_response() {
    let response: ArtistSearchResponse = serde_json::from_str("{}").unwrap();
    assert!(response.artist.is_empty());
}

#[test]
fn test_flatten_songs_skips_untitled_entries() {
    let response: SetlistsResponse = serde_json::from_str(SETLISTS_JSON).unwrap();
    let songs = flatten_songs(&response.setlist[0].sets);

    // The untitled entry in the main set is skipped; encore follows the main set
    assert_eq!(songs, vec!["Airbag", "Paranoid Android", "Karma Police"]);
}

#[test]
fn test_flatten_songs_empty_sets() {
    let response: SetlistsResponse =
        serde_json::from_str(r#"{ "setlist": [ { "eventDate": "01-01-2025" } ] }"#).unwrap();

    assert!(flatten_songs(&response.setlist[0].sets).is_empty());
}

#[test]
fn test_shows_from_response_maps_fields() {
    let artist = create_test_artist();
    let response: SetlistsResponse = serde_json::from_str(SETLISTS_JSON).unwrap();

    let shows = shows_from_response(&artist, response, 5).unwrap();

    assert_eq!(shows.len(), 2);

    let newest = &shows[0];
    assert_eq!(newest.artist, "Radiohead");
    assert_eq!(newest.event_date.as_deref(), Some("01-07-2025"));
    assert_eq!(newest.venue.as_deref(), Some("Wembley Stadium"));
    assert_eq!(newest.city.as_deref(), Some("London"));
    assert_eq!(newest.country.as_deref(), Some("United Kingdom"));
    assert_eq!(
        newest.url.as_deref(),
        Some("https://www.setlist.fm/setlist/example")
    );

    // Second show has no country and no url; absent fields stay None
    assert_eq!(shows[1].country, None);
    assert_eq!(shows[1].url, None);
    assert_eq!(shows[1].songs, vec!["Airbag", "Creep"]);
}

#[test]
fn test_shows_from_response_truncates_to_count() {
    let artist = create_test_artist();
    let response: SetlistsResponse = serde_json::from_str(SETLISTS_JSON).unwrap();

    let shows = shows_from_response(&artist, response, 1).unwrap();

    // API returns newest-first, so the head of the page survives
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].event_date.as_deref(), Some("01-07-2025"));
}

#[test]
fn test_shows_from_response_empty_is_not_found() {
    let artist = create_test_artist();
    let response: SetlistsResponse = serde_json::from_str(r#"{ "setlist": [] }"#).unwrap();

    let err = shows_from_response(&artist, response, 3).unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert!(err.to_string().contains("Radiohead"));
}

#[test]
fn test_show_with_empty_setlist_contributes_no_songs() {
    let artist = create_test_artist();
    let json = r#"{ "setlist": [ { "eventDate": "01-01-2025", "sets": { "set": [] } } ] }"#;
    let response: SetlistsResponse = serde_json::from_str(json).unwrap();

    let shows = shows_from_response(&artist, response, 1).unwrap();

    assert!(shows[0].songs.is_empty());
}
