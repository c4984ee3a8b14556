/**
 * Profile Picture Upload Handler
 *
 * POST /api/user/profile-picture (multipart, field `file`)
 *
 * The file is written to `<upload_dir>/<userId>-<unixMillis>.<ext>` and the
 * user's `profilePictureUrl` becomes `/uploads/<fileName>`, which the static
 * file service under `/uploads` serves back.
 */

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use std::path::Path;

use crate::backend::auth::users::UserUpdate;
use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;
use crate::backend::server::AppState;
use crate::shared::{ApiResponse, ProfilePicture};

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

/// Accepted content types
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Maximum accepted request body for uploads
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const DEFAULT_EXTENSION: &str = "jpg";

/// Extension taken from the client's filename, reduced to ASCII alphanumerics
pub fn file_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| {
            ext.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::Upload {
        status: err.status(),
        message: "Failed to upload profile picture".to_string(),
        detail: Some(err.body_text()),
    }
}

fn bad_upload(message: &str) -> ApiError {
    ApiError::Upload {
        status: StatusCode::BAD_REQUEST,
        message: message.to_string(),
        detail: None,
    }
}

async fn save_file(dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(file_name), bytes).await
}

async fn discard_file(dir: &Path, file_name: &str) {
    if let Err(e) = tokio::fs::remove_file(dir.join(file_name)).await {
        tracing::error!("Failed to remove orphaned upload {}: {:?}", file_name, e);
    }
}

/// Store an uploaded profile picture and point the user record at it
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    current: CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<ProfilePicture>>, ApiError> {
    state
        .store
        .find_by_id(current.id)
        .await
        .map_err(|e| ApiError::store("Failed to upload profile picture", e))?
        .ok_or_else(ApiError::user_not_found)?;

    let mut multipart = multipart?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let extension = file_extension(field.file_name());
        let bytes = field.bytes().await.map_err(multipart_error)?;
        upload = Some((content_type, extension, bytes));
        break;
    }

    let (content_type, extension, bytes) =
        upload.ok_or_else(|| bad_upload("No file provided"))?;

    if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
        tracing::warn!("Rejected upload with content type {:?}", content_type);
        return Err(bad_upload(
            "Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed.",
        ));
    }

    let file_name = format!(
        "{}-{}.{}",
        current.id,
        Utc::now().timestamp_millis(),
        extension
    );

    save_file(&state.settings.upload_dir, &file_name, &bytes)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write {}: {:?}", file_name, e);
            ApiError::Upload {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to save file".to_string(),
                detail: Some(e.to_string()),
            }
        })?;

    let profile_picture_url = format!("/uploads/{file_name}");
    let updated = state
        .store
        .update_by_id(
            current.id,
            UserUpdate {
                profile_picture_url: Some(profile_picture_url.clone()),
                ..UserUpdate::default()
            },
        )
        .await
        .map_err(|e| ApiError::store("Failed to upload profile picture", e))
        .and_then(|user| user.ok_or_else(ApiError::user_not_found));

    // The record no longer points at the file, so it must not outlive the request
    if let Err(err) = updated {
        discard_file(&state.settings.upload_dir, &file_name).await;
        return Err(err);
    }

    tracing::info!("Profile picture for {} saved as {}", current.id, file_name);

    Ok(Json(ApiResponse::ok(
        "Profile picture uploaded successfully",
        ProfilePicture {
            profile_picture_url,
        },
    )))
}
