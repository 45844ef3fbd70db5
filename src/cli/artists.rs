use tabled::Table;

use crate::{
    error::Error,
    setlistfm,
    types::ArtistTableRow,
    warning,
};

/// Searches the setlist database and prints the matches as a table, best
/// match first.
pub async fn search(query: String) {
    match setlistfm::artists::search_artists(&query).await {
        Ok(artists) => {
            let table_rows: Vec<ArtistTableRow> = artists
                .into_iter()
                .map(|a| ArtistTableRow {
                    name: a.name,
                    mbid: a.mbid,
                    disambiguation: a.disambiguation,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(Error::NotFound(msg)) => warning!("{}", msg),
        Err(e) => crate::error!("Failed to search artists. Err: {}", e),
    }
}
