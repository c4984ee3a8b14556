/**
 * Login and Logout Handlers
 *
 * POST /api/auth/login and POST /api/auth/logout
 *
 * # Security
 *
 * - Unknown emails and wrong passwords both return 401 "Invalid email or
 *   password"
 * - Passwords are compared with bcrypt and never logged
 * - Logout overwrites the cookie with an empty, already-expired value; the
 *   token itself stays valid until it expires
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::cookies::{expired_cookie, session_cookie};
use crate::backend::auth::handlers::types::{required, LoginRequest};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::{normalize_email, UserField};
use crate::backend::error::ApiError;
use crate::backend::server::AppState;
use crate::shared::ApiResponse;

/// Verify credentials and set the session cookie
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let (Some(email), Some(password)) = (
        required(&request.email),
        request.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::validation("Email and password are required"));
    };

    let email = normalize_email(email);
    tracing::info!("Login request for: {}", email);

    let user = state
        .store
        .find_by_field(UserField::Email, &email)
        .await
        .map_err(|e| ApiError::store("Login failed", e))?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", email);
            ApiError::InvalidCredentials
        })?;

    if !verify_password(password, &user.password_hash).await {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(&user.claims())
        .map_err(|e| ApiError::internal("Login failed", e))?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok((
        [(SET_COOKIE, session_cookie(&token, state.settings.secure_cookies))],
        Json(ApiResponse::ok("Login successful", user.to_public())),
    ))
}

/// Clear the session cookie
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(SET_COOKIE, expired_cookie(state.settings.secure_cookies))],
        Json(ApiResponse::<()>::done("Logout successful")),
    )
}
