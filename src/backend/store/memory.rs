/**
 * In-Memory User Store
 *
 * Keeps user records in a map guarded by an async `RwLock`. Used when no
 * `DATABASE_URL` is configured and by the test suites. Uniqueness checks and
 * the write happen under the same write lock, so concurrent registrations of
 * the same email cannot both succeed.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserField, UserUpdate, DEFAULT_PROFILE_PICTURE};
use crate::backend::store::{StoreError, UserStore};

/// Map-backed user store
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn field_value(user: &User, field: UserField) -> &str {
    match field {
        UserField::Email => &user.email,
        UserField::Username => &user.username,
    }
}

fn find_holder<'a>(
    users: &'a HashMap<Uuid, User>,
    field: UserField,
    value: &str,
) -> Option<&'a User> {
    users.values().find(|user| field_value(user, field) == value)
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_field(
        &self,
        field: UserField,
        value: &str,
    ) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(find_holder(&users, field, value).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        for (field, value) in [
            (UserField::Email, &user.email),
            (UserField::Username, &user.username),
        ] {
            if find_holder(&users, field, value).is_some() {
                return Err(StoreError::Conflict { field });
            }
        }

        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            profile_picture_url: DEFAULT_PROFILE_PICTURE.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.insert(record.id, record.clone());

        Ok(record)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        update: UserUpdate,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;

        if let Some(username) = &update.username {
            if find_holder(&users, UserField::Username, username).is_some_and(|u| u.id != id) {
                return Err(StoreError::Conflict {
                    field: UserField::Username,
                });
            }
        }

        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        update.apply_to(user, Utc::now());

        Ok(Some(user.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.write().await.remove(&id))
    }

    async fn close(&self) {
        tracing::debug!("Closing in-memory user store");
    }
}
