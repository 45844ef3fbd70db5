use setlistify::types::Show;
use setlistify::utils::*;

// Helper function to create a test show with the given songs
fn create_test_show(songs: &[&str]) -> Show {
    Show {
        artist: "Test Artist".to_string(),
        event_date: Some("01-07-2025".to_string()),
        venue: Some("Test Venue".to_string()),
        city: Some("Test City".to_string()),
        country: Some("Test Country".to_string()),
        url: Some("https://example.com/setlist".to_string()),
        songs: songs.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated states should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_generate_session_id() {
    let sid = generate_session_id();

    assert_eq!(sid.len(), 64);
    assert!(sid.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(sid, generate_session_id());
}

#[test]
fn test_dedupe_songs_keeps_first_occurrence() {
    let mut songs = vec![
        "Karma Police".to_string(),
        "Creep".to_string(),
        "Karma Police".to_string(),
        "No Surprises".to_string(),
        "Creep".to_string(),
    ];

    dedupe_songs(&mut songs);

    assert_eq!(songs, vec!["Karma Police", "Creep", "No Surprises"]);
}

#[test]
fn test_dedupe_songs_is_exact_match() {
    // Uniqueness is exact string equality - case variants survive
    let mut songs = vec!["creep".to_string(), "Creep".to_string()];

    dedupe_songs(&mut songs);

    assert_eq!(songs.len(), 2);
}

#[test]
fn test_extract_setlist_empty_input() {
    assert!(extract_setlist(&[]).is_empty());
}

#[test]
fn test_extract_setlist_dedupes_across_shows() {
    let shows = vec![create_test_show(&["A", "B"]), create_test_show(&["B", "C"])];

    assert_eq!(extract_setlist(&shows), vec!["A", "B", "C"]);
}

#[test]
fn test_extract_setlist_preserves_show_order() {
    let shows = vec![
        create_test_show(&["Opener", "Hit Single"]),
        create_test_show(&["Deep Cut", "Hit Single", "Encore"]),
    ];

    let songs = extract_setlist(&shows);

    assert_eq!(songs, vec!["Opener", "Hit Single", "Deep Cut", "Encore"]);

    // No duplicates regardless of input
    let mut sorted = songs.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), songs.len());
}

#[test]
fn test_extract_setlist_show_without_songs() {
    // A show with no songs is valid and contributes nothing
    let shows = vec![
        create_test_show(&[]),
        create_test_show(&["Only Song"]),
        create_test_show(&[]),
    ];

    assert_eq!(extract_setlist(&shows), vec!["Only Song"]);
}

#[test]
fn test_playlist_name_with_metadata() {
    let name = playlist_name("Radiohead", Some("Wembley"), Some("01-07-2025"));
    assert_eq!(name, "Radiohead at Wembley (01-07-2025)");
}

#[test]
fn test_playlist_name_venue_only() {
    let name = playlist_name("Radiohead", Some("Wembley"), None);
    assert_eq!(name, "Radiohead at Wembley");
}

#[test]
fn test_playlist_name_without_metadata() {
    assert_eq!(playlist_name("Radiohead", None, None), "Radiohead Setlist");
    assert_eq!(
        playlist_name("Radiohead", None, Some("01-07-2025")),
        "Radiohead Setlist"
    );
}

#[test]
fn test_playlist_description_mentions_artist() {
    let description = playlist_description("Radiohead");
    assert!(description.contains("Radiohead"));
}
