/**
 * API Routes
 *
 * JSON endpoints for authentication and the current user's profile.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - Create an account and sign in
 * - `POST /api/auth/login` - Sign in
 * - `POST /api/auth/logout` - Clear the session cookie
 *
 * ## Current user
 * - `GET /api/user/me` - Profile of the signed-in user
 * - `PUT /api/user/me` - Partial profile update
 * - `DELETE /api/user/me` - Delete the account
 * - `POST /api/user/profile-picture` - Upload a profile picture
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::profile_picture::MAX_UPLOAD_BYTES;
use crate::backend::auth::handlers::{
    delete_me, get_me, login, logout, register, update_me, upload_profile_picture,
};
use crate::backend::server::state::AppState;

/// Add the API routes to a router
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/user/me", get(get_me).put(update_me).delete(delete_me))
        .route(
            "/api/user/profile-picture",
            post(upload_profile_picture).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}
