use chrono::Utc;

use crate::{
    error::Result,
    spotify,
    types::Token,
};

/// Owns one Spotify token through its lifecycle.
///
/// Two states: unauthenticated is simply the absence of a manager;
/// constructing one (from a stored token or via [`TokenManager::exchange`])
/// is the authenticated state. Refresh is lazy — [`ensure_fresh`] is called
/// immediately before any authenticated request, never from a background
/// task.
///
/// The manager holds no transport or storage concerns: it returns the
/// updated token value and the boundary layer (CLI token cache, server
/// session store) decides how and where to persist it.
///
/// [`ensure_fresh`]: TokenManager::ensure_fresh
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Exchanges an authorization code for a token, entering the
    /// authenticated state.
    pub async fn exchange(code: &str) -> Result<Self> {
        let token = spotify::auth::exchange_code(code).await?;
        Ok(TokenManager { token })
    }

    /// Refreshes the token in place if it has expired, then returns it.
    ///
    /// When the refresh response omits a new refresh token, the prior one is
    /// retained unchanged.
    pub async fn ensure_fresh(&mut self) -> Result<&Token> {
        let now = Utc::now().timestamp() as u64;
        if self.token.is_expired(now) {
            self.token = spotify::auth::refresh_token(&self.token).await?;
        }
        Ok(&self.token)
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    pub fn into_token(self) -> Token {
        self.token
    }
}
