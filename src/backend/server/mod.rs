//! Server Module
//!
//! Configuration, shared state and application assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState, Settings and FromRef implementations
//! ├── config.rs - Environment configuration and store selection
//! └── init.rs   - State construction and app creation
//! ```
//!
//! # Lifecycle
//!
//! The binary loads [`config::AppConfig`], calls [`init::build_state`] once,
//! serves [`init::create_app`] until shutdown, then closes the store held in
//! the state. Nothing in here is a global; everything flows through
//! `AppState`.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use init::{build_state, create_app};
pub use state::{AppState, Settings};
