use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
};

use crate::{spotify, utils};

/// Starts the session OAuth flow: redirects the browser to the Spotify
/// consent page and parks the expected `state` in a short-lived cookie for
/// the callback to verify.
pub async fn login() -> impl IntoResponse {
    let state = utils::generate_state();
    let auth_url = spotify::auth::authorize_url(&state);

    (
        AppendHeaders([(
            SET_COOKIE,
            format!("oauth_state={state}; Max-Age=600; HttpOnly; Path=/"),
        )]),
        Redirect::to(&auth_url),
    )
}
