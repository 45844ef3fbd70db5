use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    info,
    management::{TokenCache, TokenManager},
    pipeline, success, warning,
};

/// Runs the full pipeline with the cached token and prints the playlist URL.
pub async fn playlist(artist: String, shows: usize) {
    let token = match TokenCache::load().await {
        Ok(t) => t,
        Err(e) => {
            crate::error!(
                "Failed to load token. Please run setlistify auth\n Error: {}",
                e
            );
        }
    };

    let mut token_mgr = TokenManager::new(token);
    let access_token = match token_mgr.ensure_fresh().await {
        Ok(token) => token.access_token.clone(),
        Err(e) => {
            crate::error!(
                "Failed to refresh token. Please run setlistify auth\n Error: {}",
                e
            );
        }
    };

    // write the possibly-refreshed token back to the cache
    if let Err(e) = TokenCache::store(token_mgr.current_token()).await {
        warning!("Failed to update token cache: {}", e);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Creating playlist for {artist}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = pipeline::build_playlist(&access_token, &artist, shows).await;
    pb.finish_and_clear();

    match result {
        Ok(result) => {
            success!(
                "Playlist '{}' created with {} tracks.",
                result.name,
                result.songs_added
            );
            info!("{}", result.url);
        }
        Err(e) => crate::error!("Failed to create playlist: {}", e),
    }
}
