/**
 * PostgreSQL User Store
 *
 * sqlx-backed implementation of `UserStore`. The pool is created once by
 * `PgUserStore::connect`, which also runs the embedded migrations, and is
 * closed explicitly on shutdown.
 *
 * Unique violations on `users_email_key` / `users_username_key` surface as
 * `StoreError::Conflict` so handlers can answer with a field message.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserField, UserUpdate, DEFAULT_PROFILE_PICTURE};
use crate::backend::store::{StoreError, UserStore};

const USER_COLUMNS: &str = "id, first_name, last_name, age, email, username, password_hash, \
     profile_picture_url, created_at, updated_at";

/// Maximum pooled connections
const MAX_CONNECTIONS: u32 = 10;

/// Connection-pooled PostgreSQL store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Connect to the database and run pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }
}

/// Map an insert/update failure, recognising unique violations
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let field = match db.constraint() {
                Some(constraint) if constraint.contains("username") => UserField::Username,
                _ => UserField::Email,
            };
            return StoreError::Conflict { field };
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_field(
        &self,
        field: UserField,
        value: &str,
    ) -> Result<Option<User>, StoreError> {
        // Column name comes from the enum, never from input
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {} = $1",
            field.column()
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO users (id, first_name, last_name, age, email, username, password_hash,
                               profile_picture_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.age)
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(DEFAULT_PROFILE_PICTURE)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        update: UserUpdate,
    ) -> Result<Option<User>, StoreError> {
        let sql = format!(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                age = COALESCE($4, age),
                username = COALESCE($5, username),
                profile_picture_url = COALESCE($6, profile_picture_url),
                updated_at = $7
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(update.first_name)
            .bind(update.last_name)
            .bind(update.age)
            .bind(update.username)
            .bind(update.profile_picture_url)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let sql = format!("DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}
