//! Shared Module
//!
//! This module contains the types that cross the HTTP boundary: the JSON
//! response envelope and the public user profile. They carry no server-only
//! data and can be reused by any client written in Rust.

/// Response envelope
pub mod api;

/// Public user profile types
pub mod user;

/// Re-export commonly used types for convenience
pub use api::ApiResponse;
pub use user::{ProfilePicture, PublicUser};
