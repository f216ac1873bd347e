//! Auth routes — credential endpoints and session cookie management.
//!
//! DESIGN
//! ======
//! Credential rejection is an HTTP 200 carrying `{"success": false, ...}`:
//! the client auth flow branches on the value, and only transport or server
//! faults surface as error statuses. The session cookie is only set when
//! the outcome is accepted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{AuthResult, CredentialsRequest};
use time::Duration;

use crate::services::credentials::{self, CredentialOutcome};
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|raw| parse_bool(&raw))
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn finish_auth(
    state: &AppState,
    jar: CookieJar,
    outcome: CredentialOutcome,
) -> Result<(CookieJar, Json<AuthResult>), StatusCode> {
    match outcome {
        CredentialOutcome::Accepted { user_id } => {
            let token = session::create_session(&state.pool, user_id).await.map_err(|e| {
                tracing::error!(error = %e, "session creation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            let jar = jar.add(session_cookie(token, cookie_secure()));
            Ok((jar, Json(AuthResult::ok())))
        }
        CredentialOutcome::Rejected { error } => Ok((jar, Json(AuthResult::failed(error)))),
    }
}

/// `POST /api/auth/sign-up` — register, then start a session.
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<AuthResult>), StatusCode> {
    let outcome = credentials::sign_up(&state.pool, &body.email, &body.password)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "sign-up failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    finish_auth(&state, jar, outcome).await
}

/// `POST /api/auth/sign-in` — verify credentials, then start a session.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<AuthResult>), StatusCode> {
    let outcome = credentials::sign_in(&state.pool, &body.email, &body.password)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "sign-in failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    finish_auth(&state, jar, outcome).await
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let jar = CookieJar::new().add(clear_session_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}
