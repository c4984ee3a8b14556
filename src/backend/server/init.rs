/**
 * Server Initialization
 *
 * This module assembles the application: it opens the credential store,
 * builds the token service from the configured secret, and wraps the router
 * with request tracing.
 *
 * # Initialization Process
 *
 * 1. Open the store (`DATABASE_URL` or in-memory)
 * 2. Create the token service
 * 3. Create `AppState`
 * 4. Create the router with all routes, the access guard and tracing
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{open_store, AppConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;

/// Build the shared application state from configuration
pub async fn build_state(config: &AppConfig) -> Result<AppState, StoreError> {
    tracing::info!(
        "Initializing profile-auth backend ({:?} environment)",
        config.environment
    );

    let store = open_store(config).await?;
    let tokens = TokenService::new(config.jwt_secret.as_bytes());

    Ok(AppState::new(store, tokens, config.settings()))
}

/// Create and configure the Axum application
pub fn create_app(app_state: AppState) -> Router<()> {
    let app = create_router(app_state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
    tracing::info!("Router configured");
    app
}
