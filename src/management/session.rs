use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    error::{Error, Result},
    management::TokenManager,
    types::Token,
};

/// In-memory per-session token store for the server boundary.
///
/// Sessions are the only mutable state shared between concurrent requests.
/// All access goes through one async mutex, so a token read-modify-write for
/// a session key can never interleave with another request's refresh of the
/// same session.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Token>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, session_id: String, token: Token) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session_id, token);
    }

    pub async fn get(&self, session_id: &str) -> Option<Token> {
        let sessions = self.sessions.lock().await;
        sessions.get(session_id).cloned()
    }

    /// Returns the session's token, lazily refreshed and written back.
    ///
    /// The lock is held across the refresh so two racing requests for the
    /// same session cannot clobber each other's refresh token.
    pub async fn refresh_and_get(&self, session_id: &str) -> Result<Token> {
        let mut sessions = self.sessions.lock().await;
        let token = sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| Error::Auth("Session expired".to_string()))?;

        let mut manager = TokenManager::new(token);
        manager.ensure_fresh().await?;

        let token = manager.into_token();
        sessions.insert(session_id.to_string(), token.clone());
        Ok(token)
    }
}
