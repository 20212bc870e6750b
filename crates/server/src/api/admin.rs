//! Admin session routes and the extractor that gates admin-only handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    routing::{get, post},
};
use chrono::Utc;
use hackathons_api_types::{LoginRequest, LoginResponse, SessionResponse, SuccessResponse};
use hackathons_core::domain::{AdminSession, AuthState};
use tracing::{info, warn};

use super::error::ApiError;
use super::extract::ApiJson;
use super::state::AppState;

/// Builds the admin login, session and logout routes.
pub fn create_admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/session", get(current_session))
        .route("/api/admin/logout", post(logout))
}

/// Bearer token from the `Authorization` header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves to the caller's admin session or rejects with 401.
pub struct RequireAdmin(pub AdminSession);

impl FromRequestParts<Arc<AppState>> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = state
            .sessions
            .require(bearer_token(&parts.headers), Utc::now())
            .await?;
        Ok(Self(session))
    }
}

/// Exchanges the admin credentials for a session token.
async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .sessions
        .login(&request.email, &request.password, Utc::now())
        .await
        .inspect_err(|_| warn!(email = %request.email, "admin login rejected"))?;

    info!(email = %session.email, expires_at = %session.expires_at, "admin logged in");
    Ok(Json(LoginResponse {
        token: session.token,
        email: session.email,
        expires_at: session.expires_at,
    }))
}

/// Reports whether the bearer token belongs to a live session.
async fn current_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<SessionResponse> {
    let response = match state.sessions.check(bearer_token(&headers), Utc::now()).await {
        AuthState::Authenticated(session) => SessionResponse {
            authenticated: true,
            email: Some(session.email),
            expires_at: Some(session.expires_at),
        },
        AuthState::Checking | AuthState::Unauthenticated => SessionResponse {
            authenticated: false,
            email: None,
            expires_at: None,
        },
    };
    Json(response)
}

/// Ends the caller's session.
async fn logout(
    State(state): State<Arc<AppState>>,
    RequireAdmin(session): RequireAdmin,
) -> Json<SuccessResponse> {
    state.sessions.logout(&session.token).await;
    info!(email = %session.email, "admin logged out");
    Json(SuccessResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc-123"));

        assert_eq!(bearer_token(&headers), Some("abc-123"));
    }

    #[test]
    fn other_schemes_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
