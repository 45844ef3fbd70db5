use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use setlistify::{cli, config, error, types::AuthRequest};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Search the setlist database for artists
    Artists(ArtistsOptions),

    /// Show the latest setlists of an artist
    Setlist(SetlistOptions),

    #[clap(about = "Create a Spotify playlist from recent setlists")]
    Playlist(PlaylistOptions),

    /// Run the local HTTP API
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Artist name to search for
    #[clap(long)]
    pub search: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SetlistOptions {
    /// Artist name
    #[clap(long)]
    pub artist: String,

    /// Number of recent shows to include
    #[clap(long, default_value_t = 1)]
    pub shows: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Artist name
    #[clap(long)]
    pub artist: String,

    /// Number of recent shows to include
    #[clap(long, default_value_t = 1)]
    pub shows: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<AuthRequest>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Artists(opt) => cli::search(opt.search).await,
        Command::Setlist(opt) => cli::setlist(opt.artist, opt.shows).await,
        Command::Playlist(opt) => cli::playlist(opt.artist, opt.shows).await,
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
