//! Setlistify Library
//!
//! This library turns a band's recent concert setlists into a Spotify
//! playlist. It resolves an artist against the setlist.fm database, fetches
//! the artist's most recent shows, de-duplicates the performed songs, matches
//! them against the Spotify catalog and creates a playlist for the
//! authenticated user.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local server (OAuth callback + JSON actions)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared across the pipeline
//! - `management` - Token lifecycle, token cache and session store
//! - `pipeline` - End-to-end composition of the setlist-to-playlist steps
//! - `server` - Local HTTP server for OAuth callbacks and pipeline actions
//! - `setlistfm` - setlist.fm REST client
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Pure helpers (de-duplication, playlist naming, state tokens)
//!
//! # Example
//!
//! ```
//! use setlistify::{config, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> setlistify::error::Result<()> {
//!     config::load_env().await.ok();
//!     let (artist, shows) = pipeline::latest_shows("Radiohead", 3).await?;
//!     println!("{} played {} shows", artist.name, shows.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod pipeline;
pub mod server;
pub mod setlistfm;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Fetching recent shows...");
/// info!("Found {} songs", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Playlist created");
/// success!("Matched {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Should only be used at the CLI
/// boundary for unrecoverable errors.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination.
///
/// # Example
///
/// ```
/// warning!("No track matched '{}', skipping", title);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
