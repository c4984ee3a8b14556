/**
 * Current User Handlers
 *
 * GET, PUT and DELETE /api/user/me
 *
 * All three require a verified session (`CurrentUser`), then load the record
 * the token names. A valid token for a deleted account yields 404.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::backend::auth::cookies::expired_cookie;
use crate::backend::auth::handlers::types::UpdateProfileRequest;
use crate::backend::auth::users::{validate_age, validate_username, UserField};
use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;
use crate::backend::server::Settings;
use crate::backend::store::SharedUserStore;
use crate::shared::{ApiResponse, PublicUser};

/// Return the signed-in user's profile
pub async fn get_me(
    State(store): State<SharedUserStore>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<PublicUser>>, ApiError> {
    let user = store
        .find_by_id(current.id)
        .await
        .map_err(|e| ApiError::store("Failed to retrieve user data", e))?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(ApiResponse::ok(
        "User data retrieved successfully",
        user.to_public(),
    )))
}

/// Apply a partial profile update
pub async fn update_me(
    State(store): State<SharedUserStore>,
    current: CurrentUser,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PublicUser>>, ApiError> {
    let Json(request) = payload?;
    let update = request.into_update();

    if let Some(age) = update.age {
        validate_age(age).map_err(ApiError::validation)?;
    }

    if let Some(username) = update.username.as_deref() {
        validate_username(username).map_err(ApiError::validation)?;

        let holder = store
            .find_by_field(UserField::Username, username)
            .await
            .map_err(|e| ApiError::store("Failed to update user", e))?;
        if holder.is_some_and(|other| other.id != current.id) {
            return Err(ApiError::validation(UserField::Username.taken_message()));
        }
    }

    let user = store
        .update_by_id(current.id, update)
        .await
        .map_err(|e| ApiError::store("Failed to update user", e))?
        .ok_or_else(ApiError::user_not_found)?;

    tracing::info!("User updated: {} ({})", user.username, user.id);

    Ok(Json(ApiResponse::ok("User updated successfully", user.to_public())))
}

/// Delete the signed-in user's account and clear the session cookie
pub async fn delete_me(
    State(store): State<SharedUserStore>,
    State(settings): State<Arc<Settings>>,
    current: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = store
        .delete_by_id(current.id)
        .await
        .map_err(|e| ApiError::store("Failed to delete user", e))?
        .ok_or_else(ApiError::user_not_found)?;

    tracing::info!("User deleted: {} ({})", user.username, user.id);

    Ok((
        [(SET_COOKIE, expired_cookie(settings.secure_cookies))],
        Json(ApiResponse::<()>::done("User deleted successfully")),
    ))
}
