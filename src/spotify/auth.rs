use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use tokio::sync::Mutex;

use crate::{
    config,
    error::{Error, Result},
    management::TokenCache,
    server::start_auth_server,
    success,
    types::{AuthRequest, OAuthErrorResponse, Token, TokenResponse},
    utils, warning,
};

/// Runs the interactive OAuth 2.0 authorization-code flow against Spotify.
///
/// This function orchestrates the entire authentication process:
/// 1. Generating an opaque `state` value for the redirect
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the callback to exchange the authorization code
/// 5. Persisting the obtained token for future CLI runs
///
/// The token cache write happens here, at the CLI boundary — the token
/// lifecycle itself (`management::TokenManager`) never touches storage.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the pending `state`
///   value and, once the callback has run, the exchanged token
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthRequest>>>) {
    let state = utils::generate_state();

    // start the local callback server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_auth_server(server_state).await;
    });

    let auth_url = authorize_url(&state);

    // Store the expected state before the redirect round-trips
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthRequest { state, token: None });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            if let Err(e) = TokenCache::store(&t).await {
                crate::error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            crate::error!("Authentication failed or timed out.");
        }
    }
}

/// Builds the user-consent URL for the authorization-code grant.
pub fn authorize_url(state: &str) -> String {
    format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope(),
        state = state
    )
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed exchange with a 60-second timeout.
/// Runs concurrently with the callback handler that populates the token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthRequest>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(auth_request) = lock.as_ref() {
            if let Some(token) = &auth_request.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access+refresh token pair.
///
/// Final step of the authorization-code grant. The token endpoint is called
/// with HTTP Basic credentials; expiry is computed client-side as now plus
/// the provider-reported ttl.
///
/// # Errors
///
/// `Error::Auth` with the provider's reason when the code is invalid or
/// already used; `Error::Transport` on network failures.
pub async fn exchange_code(code: &str) -> Result<Token> {
    let client = super::client()?;
    let response = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_credentials())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Auth(token_error_reason(response).await));
    }

    let body = response.json::<TokenResponse>().await?;
    Ok(Token::from_response(body, Utc::now().timestamp() as u64))
}

/// Exchanges a refresh token for a new access token.
///
/// The provider may omit a new refresh token from the response, in which
/// case the prior refresh token is retained (see `Token::merged_refresh`).
///
/// # Errors
///
/// `Error::Auth` when the refresh token has been revoked or is malformed;
/// `Error::Transport` on network failures.
pub async fn refresh_token(token: &Token) -> Result<Token> {
    let client = super::client()?;
    let response = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_credentials())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", &token.refresh_token),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Auth(token_error_reason(response).await));
    }

    let body = response.json::<TokenResponse>().await?;
    Ok(token.merged_refresh(body, Utc::now().timestamp() as u64))
}

/// HTTP Basic credentials for the token endpoint: base64 of
/// `client_id:client_secret`.
fn basic_credentials() -> String {
    let credentials = STANDARD.encode(format!(
        "{client_id}:{client_secret}",
        client_id = config::spotify_client_id(),
        client_secret = config::spotify_client_secret()
    ));
    format!("Basic {credentials}")
}

async fn token_error_reason(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<OAuthErrorResponse>().await {
        Ok(body) => body.error_description.unwrap_or(body.error),
        Err(_) => format!("HTTP {status}"),
    }
}
