//! Credential Store
//!
//! Persistence for user records behind the [`UserStore`] trait. Handlers only
//! see `Arc<dyn UserStore>`; the concrete store is chosen once at startup and
//! closed on shutdown.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgUserStore`, sqlx connection pool with embedded migrations
//! - **`memory`** - `MemoryUserStore`, in-process map for development and tests
//!
//! Both enforce unique email and username and report a violation as
//! [`StoreError::Conflict`].

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserField, UserUpdate};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Store handle shared across handlers
pub type SharedUserStore = Arc<dyn UserStore>;

/// Errors raised by a credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already holds this unique value
    #[error("{field} already exists")]
    Conflict { field: UserField },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence contract for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by a unique field
    async fn find_by_field(&self, field: UserField, value: &str)
        -> Result<Option<User>, StoreError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a new user
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Apply a partial update; `None` if no such user
    async fn update_by_id(&self, id: Uuid, update: UserUpdate)
        -> Result<Option<User>, StoreError>;

    /// Delete a user, returning the removed record
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Release connections; the store must not be used afterwards
    async fn close(&self);
}
