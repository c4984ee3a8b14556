/**
 * Handler Request Types
 *
 * Request bodies accepted by the auth and profile handlers. Every field is
 * optional at the serde level so that a missing field produces the
 * envelope's "All fields are required" message instead of a bare
 * deserialization failure.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserUpdate;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial profile update
///
/// Email, password and the picture URL cannot be changed here.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub username: Option<String>,
}

impl UpdateProfileRequest {
    /// Trimmed changes, with empty strings treated as "no change"
    pub fn into_update(self) -> UserUpdate {
        fn trimmed(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        UserUpdate {
            first_name: trimmed(self.first_name),
            last_name: trimmed(self.last_name),
            age: self.age,
            username: trimmed(self.username),
            profile_picture_url: None,
        }
    }
}

/// Required string field: trimmed, `None` when absent or blank
pub(crate) fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
