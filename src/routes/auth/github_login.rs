use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine;
use rand_core::{OsRng, RngCore};

use crate::{
    responses::JsonResponse,
    routes::auth::claims::SESSION_TTL_HOURS,
    services::oauth::github::{errors::GitHubAuthError, models::GitHubCallback},
    state::AppState,
};

/// Redirects to GitHub's OAuth authorization page with CSRF protection
pub async fn github_login(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let mut csrf_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut csrf_bytes);
    let csrf_token = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(csrf_bytes);

    let state_cookie = Cookie::build(("oauth_state", csrf_token.clone()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::minutes(10))
        .build();

    let github = &state.config.github;
    let scope = "read:user";

    let github_url = format!(
        "{}?client_id={}&redirect_uri={}&scope={}&state={}",
        github.authorize_url, github.client_id, github.redirect_uri, scope, csrf_token,
    );

    (jar.add(state_cookie), Redirect::to(&github_url))
}

/// Handles the GitHub OAuth callback, validates state, and logs in/creates user
pub async fn github_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<GitHubCallback>,
) -> Response {
    let frontend_origin = state.config.frontend_origin.clone();

    let expected_state = match jar.get("oauth_state").map(|c| c.value().to_string()) {
        Some(value) => value,
        None => {
            return JsonResponse::redirect_to_login_with_error(
                &frontend_origin,
                &GitHubAuthError::MissingStateCookie.to_string(),
            )
            .into_response();
        }
    };

    if params.state != expected_state {
        return JsonResponse::redirect_to_login_with_error(
            &frontend_origin,
            &GitHubAuthError::InvalidState.to_string(),
        )
        .into_response();
    }

    let session = match state.authenticator.execute(&params.code).await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(%err, "GitHub login failed");
            return JsonResponse::redirect_to_login_with_error(&frontend_origin, &err.to_string())
                .into_response();
        }
    };

    let auth_cookie = Cookie::build(("auth_token", session.token))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(SESSION_TTL_HOURS))
        .build();

    let clear_state_cookie = Cookie::build(("oauth_state", ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .build();

    let jar = CookieJar::new().add(auth_cookie).add(clear_state_cookie);

    (jar, Redirect::to(&frontend_origin)).into_response()
}
