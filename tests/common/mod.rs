//! Common test utilities and helpers
//!
//! - In-process application with an in-memory store and a temporary upload
//!   directory
//! - Request builders and response readers
//! - Custom assertion macros

pub mod app;
pub mod assertions;
pub mod requests;

pub use app::*;
pub use requests::*;
