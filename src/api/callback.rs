use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use tokio::sync::Mutex;

use crate::{
    management::SessionStore,
    spotify,
    types::AuthRequest,
    utils, warning,
};

/// OAuth callback for the CLI `auth` flow.
///
/// Verifies the `state` round-trip, exchanges the authorization code and
/// parks the token in the shared state the waiting command polls.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthRequest>>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut auth_request) = state.as_mut() else {
        return Html("<h4>No authorization in progress.</h4>");
    };

    if params.get("state") != Some(&auth_request.state) {
        return Html("<h4>State mismatch.</h4>");
    }

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            auth_request.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close the browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}

/// OAuth callback for the server session flow.
///
/// Verifies the query `state` against the `oauth_state` cookie set by
/// `/login`, exchanges the code and opens a new session backed by the
/// in-memory store; the session id travels back as a `sid` cookie.
pub async fn session_callback(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Extension(sessions): Extension<SessionStore>,
) -> Response {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    let expected_state = super::cookie_value(&headers, "oauth_state");
    if expected_state.is_none() || params.get("state") != expected_state.as_ref() {
        return Html("<h4>State mismatch.</h4>").into_response();
    }

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            let session_id = utils::generate_session_id();
            sessions.put(session_id.clone(), token).await;

            (
                AppendHeaders([(
                    SET_COOKIE,
                    format!("sid={session_id}; HttpOnly; SameSite=Lax; Path=/"),
                )]),
                Html("<h2>Spotify linked.</h2><p>Return to the app.</p>"),
            )
                .into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>").into_response()
        }
    }
}
