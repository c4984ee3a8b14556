//! Authentication Module
//!
//! User accounts, password hashing, session tokens and the HTTP handlers
//! built on them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── users.rs     - User record, updates and field validation
//! ├── password.rs  - bcrypt hashing off the async runtime
//! ├── sessions.rs  - Token Service (JWT issue/verify)
//! ├── cookies.rs   - `auth-token` cookie extraction and Set-Cookie values
//! └── handlers/    - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: profile fields + password -> user created -> token set in cookie
//! 2. **Login**: email + password -> credentials verified -> token set in cookie
//! 3. **Requests**: cookie -> token verified -> `CurrentUser`
//! 4. **Logout / delete**: cookie overwritten with an expired value
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt; hashes never leave the server
//! - Tokens are HS256 JWTs that expire 7 days after issue
//! - Expired and forged tokens are rejected the same way
//! - Login failures return a uniform 401

/// User record and validation
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie handling
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use cookies::{extract_token, AUTH_COOKIE_NAME};
pub use handlers::{
    delete_me, get_me, login, logout, register, upload_profile_picture, LoginRequest,
    RegisterRequest, UpdateProfileRequest,
};
pub use sessions::{IdentityClaims, TokenService};
pub use users::{User, UserField};
