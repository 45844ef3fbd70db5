use std::collections::HashSet;

use rand::{Rng, distr::Alphanumeric};

use crate::types::Show;

/// Generates the opaque `state` value carried through the OAuth redirect.
pub fn generate_state() -> String {
    random_token(32)
}

/// Generates an identifier for a server-side session.
pub fn generate_session_id() -> String {
    random_token(64)
}

fn random_token(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Collapses duplicate song titles in place, keeping the first occurrence.
///
/// Uniqueness is exact string equality; order of the surviving entries is
/// unchanged.
pub fn dedupe_songs(songs: &mut Vec<String>) {
    let mut seen = HashSet::new();
    songs.retain(|song| seen.insert(song.clone()));
}

/// Concatenates all shows' songs in show order and de-duplicates the result.
///
/// Pure function: no show yields no songs, and `extract_setlist(&[])` is
/// empty.
pub fn extract_setlist(shows: &[Show]) -> Vec<String> {
    let mut songs: Vec<String> = shows
        .iter()
        .flat_map(|show| show.songs.iter().cloned())
        .collect();
    dedupe_songs(&mut songs);
    songs
}

/// Builds the playlist title from the artist and optional event metadata.
pub fn playlist_name(artist: &str, venue: Option<&str>, date: Option<&str>) -> String {
    match (venue, date) {
        (Some(venue), Some(date)) => format!("{artist} at {venue} ({date})"),
        (Some(venue), None) => format!("{artist} at {venue}"),
        _ => format!("{artist} Setlist"),
    }
}

pub fn playlist_description(artist: &str) -> String {
    format!("A playlist generated from recent setlists of {artist}. Created by Setlistify.")
}
