//! Authentication Handlers Module
//!
//! HTTP handlers for the auth and profile endpoints. Handlers stay thin:
//! they validate input, call the store, password and token services, and
//! wrap results in the `ApiResponse` envelope.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs             - Module exports and documentation
//! ├── types.rs           - Request types
//! ├── register.rs        - Account registration
//! ├── login.rs           - Login and logout
//! ├── me.rs              - Get, update and delete the current user
//! └── profile_picture.rs - Profile picture upload
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`logout`** - POST /api/auth/logout
//! - **`get_me`** / **`update_me`** / **`delete_me`** - GET/PUT/DELETE /api/user/me
//! - **`upload_profile_picture`** - POST /api/user/profile-picture
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use profile_auth::backend::auth::handlers::{get_me, login, register};
//! use profile_auth::backend::server::AppState;
//!
//! # fn example(state: AppState) -> Router {
//! Router::new()
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/user/me", get(get_me))
//!     .with_state(state)
//! # }
//! ```

/// Request types
pub mod types;

/// Registration handler
pub mod register;

/// Login and logout handlers
pub mod login;

/// Current user handlers
pub mod me;

/// Profile picture upload handler
pub mod profile_picture;

pub use types::{LoginRequest, RegisterRequest, UpdateProfileRequest};

pub use login::{login, logout};
pub use me::{delete_me, get_me, update_me};
pub use profile_picture::upload_profile_picture;
pub use register::register;
