//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server, grouped by concern.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Router assembly, static files, guard and fallback
//! ├── page_routes.rs - HTML placeholder pages and the `/` redirect
//! └── api_routes.rs  - JSON API endpoints
//! ```
//!
//! # Route Types
//!
//! ## Pages
//!
//! - `GET /` - Redirect to `/auth/login`
//! - `GET /auth/login`, `GET /auth/register` - Anonymous only
//! - `GET /main/welcome`, `GET /main/profile` - Signed-in only
//!
//! ## API
//!
//! - `POST /api/auth/register`, `POST /api/auth/login`, `POST /api/auth/logout`
//! - `GET|PUT|DELETE /api/user/me`
//! - `POST /api/user/profile-picture`
//!
//! ## Static
//!
//! - `GET /uploads/*` - Uploaded profile pictures

/// Main router creation
pub mod router;

/// HTML page routes
pub mod page_routes;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
