//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`guard`** - Access guard that redirects between the public auth pages
//!   and the protected `/main` pages
//! - **`auth`** - `CurrentUser` extractor used by API handlers to require a
//!   verified session

pub mod auth;
pub mod guard;

pub use auth::CurrentUser;
pub use guard::{access_guard, classify, decide, GuardDecision, PathClass};
