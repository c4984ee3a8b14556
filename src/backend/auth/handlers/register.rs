/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Check that every field is present and the passwords match
 * 2. Validate names, age, email, username and password
 * 3. Reject an email or username that is already taken
 * 4. Hash the password and create the user
 * 5. Issue a session token and set the `auth-token` cookie
 *
 * Returns 201 with the public user. The store's unique constraints catch a
 * concurrent registration that slips past step 3.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json},
};

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::handlers::types::{required, RegisterRequest};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{
    normalize_email, validate_age, validate_email, validate_name, validate_password,
    validate_username, NewUser, UserField,
};
use crate::backend::error::ApiError;
use crate::backend::server::AppState;
use crate::shared::ApiResponse;

/// Register a new account and sign it in
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let (
        Some(first_name),
        Some(last_name),
        Some(age),
        Some(email),
        Some(username),
        Some(password),
        Some(confirm_password),
    ) = (
        required(&request.first_name),
        required(&request.last_name),
        // Zero counts as not supplied
        request.age.filter(|age| *age != 0),
        required(&request.email),
        required(&request.username),
        request.password.as_deref().filter(|p| !p.is_empty()),
        request.confirm_password.as_deref().filter(|p| !p.is_empty()),
    )
    else {
        return Err(ApiError::validation("All fields are required"));
    };

    if password != confirm_password {
        return Err(ApiError::validation("Passwords do not match"));
    }

    let email = normalize_email(email);
    validate_name(first_name, "First name")
        .and_then(|_| validate_name(last_name, "Last name"))
        .and_then(|_| validate_age(age))
        .and_then(|_| validate_email(&email))
        .and_then(|_| validate_username(username))
        .and_then(|_| validate_password(password))
        .map_err(ApiError::validation)?;

    tracing::info!("Registration request for: {}", email);

    for (field, value) in [(UserField::Email, email.as_str()), (UserField::Username, username)] {
        let existing = state
            .store
            .find_by_field(field, value)
            .await
            .map_err(|e| ApiError::store("Registration failed", e))?;
        if existing.is_some() {
            tracing::warn!("Registration rejected, {} taken: {}", field, value);
            return Err(ApiError::validation(field.taken_message()));
        }
    }

    let password_hash = hash_password(password, state.settings.bcrypt_cost)
        .await
        .map_err(|e| ApiError::internal("Registration failed", e))?;

    let user = state
        .store
        .create(NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            email,
            username: username.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| ApiError::store("Registration failed", e))?;

    let token = state
        .tokens
        .issue(&user.claims())
        .map_err(|e| ApiError::internal("Registration failed", e))?;

    tracing::info!("User registered: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, session_cookie(&token, state.settings.secure_cookies))],
        Json(ApiResponse::ok("User registered successfully", user.to_public())),
    ))
}
