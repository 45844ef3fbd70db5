//! # CLI Module
//!
//! User-facing command implementations. Each command is a thin layer over
//! the pipeline: it parses nothing itself (clap does that in `main`), drives
//! the relevant pipeline functions, and renders results with the output
//! macros, spinners and tables.
//!
//! ## Commands
//!
//! - [`auth`] - interactive Spotify authorization, token cached locally
//! - [`search`] - artist resolution against the setlist database
//! - [`setlist`] - recent shows and their de-duplicated song list
//! - [`playlist`] - the full pipeline, ending in a created Spotify playlist
//! - [`serve`] - the local JSON action server
//!
//! Pipeline failures are rendered as messages (`warning!`/`error!`); the
//! only panics here are the deliberate process exits of the `error!` macro.

mod artists;
mod auth;
mod playlist;
mod serve;
mod setlist;

pub use artists::search;
pub use auth::auth;
pub use playlist::playlist;
pub use serve::serve;
pub use setlist::setlist;
