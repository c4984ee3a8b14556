/**
 * Router Configuration
 *
 * Combines all route groups into a single Axum router.
 *
 * # Route Order
 *
 * 1. Page routes (`/`, `/auth/...`, `/main/...`)
 * 2. API routes (`/api/auth/...`, `/api/user/...`)
 * 3. Uploaded files (`/uploads/...`)
 * 4. Fallback (404 envelope)
 *
 * The access guard wraps every route, including the fallback, so unknown
 * `/main/...` paths still redirect anonymous visitors to the login page.
 */

use axum::{middleware::from_fn_with_state, Router};
use tower_http::services::ServeDir;

use crate::backend::error::ApiError;
use crate::backend::middleware::guard::access_guard;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_page_routes(Router::new());

    let router = configure_api_routes(router);

    let router = router.nest_service(
        "/uploads",
        ServeDir::new(app_state.settings.upload_dir.clone()),
    );

    let router = router.fallback(|| async { ApiError::not_found("Not Found") });

    router
        .layer(from_fn_with_state(app_state.clone(), access_guard))
        .with_state(app_state)
}
