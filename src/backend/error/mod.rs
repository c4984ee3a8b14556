//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and constructors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Store and configuration errors live next to the code that raises them
//! (`store::StoreError`, `server::config::ConfigError`); handlers wrap store
//! errors with `ApiError::store` to attach a client-facing summary.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
