use axum::{
    extract::{FromRequestParts, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use uuid::Uuid;

use crate::models::user::PublicUser;
use crate::responses::JsonResponse;
use crate::routes::auth::claims::Claims;
use crate::state::AppState;
use crate::utils::jwt::decode_jwt;

#[derive(Debug, PartialEq)]
pub struct AuthSession(pub Claims);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get("auth_token").ok_or(StatusCode::UNAUTHORIZED)?;

        let claims =
            decode_jwt(token.value(), &state.jwt_keys).map_err(|_| StatusCode::UNAUTHORIZED)?;

        Ok(AuthSession(claims.claims))
    }
}

/// Returns the profile of the currently signed-in user.
pub async fn handle_me(
    State(state): State<AppState>,
    AuthSession(claims): AuthSession,
) -> Response {
    let user_id = match Uuid::parse_str(&claims.sub) {
        Ok(id) => id,
        Err(_) => return JsonResponse::unauthorized("Invalid user ID").into_response(),
    };

    match state.db.find_user_by_id(user_id).await {
        Ok(Some(user)) => Json(json!({
            "success": true,
            "user": PublicUser::from(&user),
        }))
        .into_response(),
        Ok(None) => JsonResponse::not_found("User not found").into_response(),
        Err(err) => {
            tracing::error!(?err, %user_id, "failed to load user for session");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}
