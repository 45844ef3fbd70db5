use crate::{config, info, management::SessionStore, server};

/// Runs the local JSON action server until interrupted.
pub async fn serve() {
    let sessions = SessionStore::new();
    info!("Starting Setlistify API on {}", config::server_addr());
    server::start_api_server(sessions).await;
}
