use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error::Error,
    info, pipeline,
    types::SongTableRow,
    utils, warning,
};

/// Fetches an artist's recent shows and prints the de-duplicated song list.
pub async fn setlist(artist: String, shows: usize) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching recent shows...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = pipeline::latest_shows(&artist, shows).await;
    pb.finish_and_clear();

    match result {
        Ok((artist, shows)) => {
            for show in &shows {
                info!(
                    "{date} — {venue}, {city}",
                    date = show.event_date.as_deref().unwrap_or("unknown date"),
                    venue = show.venue.as_deref().unwrap_or("unknown venue"),
                    city = show.city.as_deref().unwrap_or("unknown city"),
                );
            }

            let songs = utils::extract_setlist(&shows);
            if songs.is_empty() {
                warning!("No songs recorded for the latest shows of {}.", artist.name);
                return;
            }

            let table_rows: Vec<SongTableRow> = songs
                .into_iter()
                .enumerate()
                .map(|(i, title)| SongTableRow {
                    position: i + 1,
                    title,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(Error::NotFound(msg)) => warning!("{}", msg),
        Err(e) => crate::error!("Failed to fetch setlists. Err: {}", e),
    }
}
