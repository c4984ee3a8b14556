/**
 * Application State
 *
 * `AppState` is built once at startup and cloned into every request. All of
 * its parts are read-only after construction; `FromRef` lets handlers
 * extract just the piece they need.
 */

use axum::extract::FromRef;
use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::store::SharedUserStore;

/// Request-time settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Add the `Secure` attribute to session cookies
    pub secure_cookies: bool,
    /// Directory profile pictures are written to and served from
    pub upload_dir: PathBuf,
    /// bcrypt cost for new password hashes
    pub bcrypt_cost: u32,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SharedUserStore,
    pub tokens: Arc<TokenService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: SharedUserStore, tokens: TokenService, settings: Settings) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            settings: Arc::new(settings),
        }
    }
}

impl FromRef<AppState> for SharedUserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.settings.clone()
    }
}
