//! Backend Module
//!
//! All server-side code: the Axum router, session handling, the access guard
//! and the credential store.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs       - Module exports and documentation
//! ├── server/      - Configuration, state and app assembly
//! ├── routes/      - Route configuration
//! ├── auth/        - Users, passwords, tokens, cookies and handlers
//! ├── middleware/  - Access guard and `CurrentUser` extractor
//! ├── store/       - Credential store trait and backends
//! └── error/       - `ApiError` and its HTTP conversion
//! ```
//!
//! # Request Flow
//!
//! 1. `TraceLayer` opens a span for the request
//! 2. The access guard redirects page requests based on the session cookie
//! 3. API handlers extract `CurrentUser` where a session is required
//! 4. Handlers talk to the store and return `ApiResponse` or `ApiError`

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Credential store
pub mod store;

pub use error::ApiError;
pub use server::{build_state, create_app, AppConfig, AppState};
