//! Profile Auth - Main Library
//!
//! Backend for a small authenticated web application: registration, login
//! and logout with signed session tokens carried in an `auth-token` cookie,
//! profile viewing and editing, profile picture upload and account deletion.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared with clients
//!   - `ApiResponse` envelope, `PublicUser`, `ProfilePicture`
//!
//! - **`backend`** - Axum server
//!   - Token Service, session cookie and password hashing (`auth`)
//!   - Access guard and `CurrentUser` extractor (`middleware`)
//!   - Credential store with Postgres and in-memory backends (`store`)
//!   - Configuration, state and router assembly (`server`, `routes`)
//!
//! # Usage
//!
//! ```rust,no_run
//! use profile_auth::backend::server::{build_state, create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let state = build_state(&config).await?;
//! let app = create_app(state);
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! `AppState` is built once and shared read-only; the store handles its own
//! synchronization (connection pool or `RwLock`).

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
