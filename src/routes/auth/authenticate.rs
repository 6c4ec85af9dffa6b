use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::user::PublicUser, responses::JsonResponse,
    services::oauth::github::errors::GitHubAuthError, state::AppState,
};

#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub code: String,
}

/// Exchanges a GitHub authorization code for a session token and the resolved
/// local user.
pub async fn handle_authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticateRequest>,
) -> Response {
    if payload.code.trim().is_empty() {
        return JsonResponse::bad_request("Missing authorization code").into_response();
    }

    match state.authenticator.execute(&payload.code).await {
        Ok(session) => Json(json!({
            "token": session.token,
            "user": PublicUser::from(&session.user),
        }))
        .into_response(),
        Err(err) => github_auth_error_response(err),
    }
}

/// Maps handshake failures onto HTTP: provider-side rejections are the
/// caller's fault (401), anything on our side is a 500.
pub(crate) fn github_auth_error_response(err: GitHubAuthError) -> Response {
    use GitHubAuthError::*;
    match &err {
        TokenExchangeFailed | InvalidTokenJson | UserInfoFetchFailed | InvalidUserInfo => {
            JsonResponse::unauthorized(&err.to_string()).into_response()
        }
        MissingStateCookie | InvalidState => {
            JsonResponse::bad_request(&err.to_string()).into_response()
        }
        DbError(db_err) => {
            tracing::error!(?db_err, "database error during authentication");
            JsonResponse::server_error("Database error").into_response()
        }
        UserCreationFailed | JwtCreationFailed => {
            JsonResponse::server_error(&err.to_string()).into_response()
        }
    }
}
