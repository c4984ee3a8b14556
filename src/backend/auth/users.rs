/**
 * User Model
 *
 * This module defines the stored user record, the inputs used to create and
 * update it, and the field rules shared by registration and profile edits.
 */

use chrono::{DateTime, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::backend::auth::sessions::IdentityClaims;
use crate::shared::PublicUser;

/// Avatar assigned to every new account
pub const DEFAULT_PROFILE_PICTURE: &str = "/default-avatar.png";

/// Minimum age accepted at registration and on profile edits
pub const MIN_AGE: i32 = 13;

/// Minimum username length (characters)
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length (characters)
pub const MIN_PASSWORD_LEN: usize = 6;

/// User struct representing a stored account
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    /// Email address (unique, lowercase)
    pub email: String,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub profile_picture_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Client-facing view without the password hash
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            email: self.email.clone(),
            username: self.username.clone(),
            profile_picture_url: self.profile_picture_url.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Identity claims to embed in a session token
    pub fn claims(&self) -> IdentityClaims {
        IdentityClaims {
            user_id: self.id.to_string(),
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}

/// Input for creating a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub username: Option<String>,
    pub profile_picture_url: Option<String>,
}

impl UserUpdate {
    /// Apply the update to a record in place
    pub fn apply_to(self, user: &mut User, now: DateTime<Utc>) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(url) = self.profile_picture_url {
            user.profile_picture_url = url;
        }
        user.updated_at = now;
    }
}

/// Unique lookup fields of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Email,
    Username,
}

impl UserField {
    /// Column name in the users table
    pub fn column(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
        }
    }

    /// Message shown when another account already holds the value
    pub fn taken_message(self) -> &'static str {
        match self {
            Self::Email => "Email already in use",
            Self::Username => "Username already taken",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Trim and lowercase an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// `local@domain.tld` shape: non-whitespace runs around an `@` and a `.`
fn email_pattern() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^\S+@\S+\.\S+$").unwrap()
    });
    &EMAIL_REGEX
}

/// Check an email address against the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Validate a first or last name (already trimmed)
pub fn validate_name(name: &str, label: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(())
}

/// Validate an age
pub fn validate_age(age: i32) -> Result<(), String> {
    if age < MIN_AGE {
        return Err(format!("Must be at least {MIN_AGE} years old"));
    }
    Ok(())
}

/// Validate a username (already trimmed)
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters long"
        ));
    }
    Ok(())
}

/// Validate a plaintext password before hashing
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    Ok(())
}

/// Validate a normalized email
pub fn validate_email(email: &str) -> Result<(), String> {
    if !is_valid_email(email) {
        return Err("Please use a valid email address".to_string());
    }
    Ok(())
}
