//! In-process test application
//!
//! Builds the real router over a `MemoryUserStore`, so tests exercise the
//! same guard, extractors and handlers as the server binary.

use axum::{body::Body, http::Request, response::Response, Router};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use profile_auth::backend::auth::sessions::{IdentityClaims, TokenService};
use profile_auth::backend::server::{create_app, AppState, Settings};
use profile_auth::backend::store::{MemoryUserStore, SharedUserStore};

use super::requests::{body_json, json_request, session_cookie};

pub const TEST_SECRET: &[u8] = b"integration-test-secret";
pub const TEST_PASSWORD: &str = "hunter22";

/// A registered account and its session cookie (`auth-token=...`)
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub username: String,
    pub cookie: String,
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryUserStore>,
    pub tokens: TokenService,
    pub upload_dir: PathBuf,
    _upload_root: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(|store| store)
    }

    /// Build the app over a store layered on the in-memory one
    pub fn with_store(wrap: impl FnOnce(Arc<MemoryUserStore>) -> SharedUserStore) -> Self {
        let upload_root = tempfile::tempdir().expect("Failed to create temp dir");
        // Not created up front; the upload handler creates it on demand
        let upload_dir = upload_root.path().join("uploads");

        let store = Arc::new(MemoryUserStore::new());
        let settings = Settings {
            secure_cookies: false,
            upload_dir: upload_dir.clone(),
            bcrypt_cost: 4,
        };
        let state = AppState::new(wrap(store.clone()), TokenService::new(TEST_SECRET), settings);

        Self {
            router: create_app(state),
            store,
            tokens: TokenService::new(TEST_SECRET),
            upload_dir,
            _upload_root: upload_root,
        }
    }

    /// Send one request through the full middleware stack
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }

    /// Cookie header value for a token signed with the app's secret
    pub fn cookie_for(&self, claims: &IdentityClaims) -> String {
        let token = self.tokens.issue(claims).expect("Failed to issue token");
        format!("auth-token={token}")
    }

    /// Register an account through the API and return its session cookie
    pub async fn register(&self, username: &str, email: &str) -> TestUser {
        let response = self
            .send(json_request(
                "POST",
                "/api/auth/register",
                registration_body(username, email),
                None,
            ))
            .await;
        assert_eq!(response.status(), 201, "registration of {username} failed");

        let cookie = session_cookie(&response).expect("registration sets the session cookie");
        let body = body_json(response).await;
        let data = &body["data"];

        TestUser {
            id: data["_id"].as_str().expect("user id").to_string(),
            email: data["email"].as_str().expect("email").to_string(),
            username: data["username"].as_str().expect("username").to_string(),
            cookie,
        }
    }
}

/// A complete, valid registration body
pub fn registration_body(username: &str, email: &str) -> Value {
    json!({
        "firstName": "Test",
        "lastName": "User",
        "age": 30,
        "email": email,
        "username": username,
        "password": TEST_PASSWORD,
        "confirmPassword": TEST_PASSWORD,
    })
}
