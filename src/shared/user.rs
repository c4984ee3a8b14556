/**
 * Public User Types
 *
 * Client-facing view of a user record. The password hash never leaves the
 * backend, so these types simply have no field for it.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile as returned by the API
///
/// Field names follow the JSON contract the web client expects
/// (`_id`, `firstName`, `profilePictureUrl`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    /// User ID (UUID)
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub username: String,
    /// Site-relative URL of the avatar image
    pub profile_picture_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload returned after a profile picture upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    pub profile_picture_url: String,
}
