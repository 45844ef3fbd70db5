//! Configuration management for Setlistify.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the setlist.fm API key, Spotify
//! OAuth credentials, server settings and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults for the public endpoint URLs

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `setlistify/.env`. A missing `.env` file is not
/// an error; variables already present in the process environment still apply.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/setlistify/.env`
/// - macOS: `~/Library/Application Support/setlistify/.env`
/// - Windows: `%LOCALAPPDATA%/setlistify/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("setlistify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Tolerate a missing file; the process environment may carry everything.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the server address for the local HTTP server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the local server binds, both for the OAuth callback
/// during `setlistify auth` and for the JSON API under `setlistify serve`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the setlist.fm API key.
///
/// Retrieves the `SETLISTFM_API_KEY` environment variable. The key is sent as
/// the `x-api-key` header on every setlist.fm request.
///
/// # Panics
///
/// Panics if the `SETLISTFM_API_KEY` environment variable is not set.
pub fn setlistfm_api_key() -> String {
    env::var("SETLISTFM_API_KEY").expect("SETLISTFM_API_KEY must be set")
}

/// Returns the setlist.fm REST API base URL.
///
/// Defaults to the public endpoint when `SETLISTFM_API_URL` is unset; the
/// override exists for local testing.
pub fn setlistfm_apiurl() -> String {
    env::var("SETLISTFM_API_URL")
        .unwrap_or_else(|_| "https://api.setlist.fm/rest/1.0".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable. The
/// secret is combined with the client ID into the HTTP Basic credentials sent
/// to the token endpoint.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not
/// set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which
/// specifies the callback URL that Spotify redirects to after user
/// authorization. This must match the redirect URI registered in the Spotify
/// application settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// Defaults to the playlist-modification scopes the pipeline needs when
/// `SPOTIFY_API_AUTH_SCOPE` is unset.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE")
        .unwrap_or_else(|_| "playlist-modify-public playlist-modify-private".to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Defaults to the public endpoint when `SPOTIFY_API_AUTH_URL` is unset.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Defaults to the public endpoint when `SPOTIFY_API_URL` is unset.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Defaults to the public endpoint when `SPOTIFY_API_TOKEN_URL` is unset. Used
/// both for the authorization-code exchange and for refresh-token grants.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
