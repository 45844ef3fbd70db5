use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, management::SessionStore, types::AuthRequest};

/// Minimal server for the CLI `auth` flow: just the OAuth callback and a
/// health probe.
pub async fn start_auth_server(state: Arc<Mutex<Option<AuthRequest>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    serve(app).await;
}

/// Full action server for `setlistify serve`: login/session handling plus the
/// JSON pipeline endpoints.
pub async fn start_api_server(sessions: SessionStore) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::session_callback))
        .route("/api/searchArtist", get(api::search_artist))
        .route("/api/setlist", get(api::setlist))
        .route("/api/createPlaylist", post(api::create_playlist))
        .layer(Extension(sessions));

    serve(app).await;
}

async fn serve(app: Router) {
    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => crate::error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => crate::error!("Failed to bind {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        crate::error!("Server error: {}", e);
    }
}
