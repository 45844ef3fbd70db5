use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::AuthRequest};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthRequest>>>) {
    spotify::auth::auth(shared_state).await;
}
