//! Current user API integration tests
//!
//! Profile read, update, delete and picture upload.

use async_trait::async_trait;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use profile_auth::backend::auth::users::{NewUser, User, UserField, UserUpdate};
use profile_auth::backend::store::{MemoryUserStore, StoreError, UserStore};

use crate::common::{
    body_bytes, body_json, json_request, multipart_request, request, set_cookie_header, Part,
    TestApp,
};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-an-image";

fn file_part<'a>(file_name: &'a str, content_type: &'a str, data: &'a [u8]) -> Part<'a> {
    Part {
        name: "file",
        file_name: Some(file_name),
        content_type: Some(content_type),
        data,
    }
}

#[tokio::test]
async fn test_get_me_requires_session() {
    let app = TestApp::new();

    let response = app.send(request("GET", "/api/user/me", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "message": "Unauthorized" })
    );

    let response = app
        .send(request("GET", "/api/user/me", Some("auth-token=forged.token.value")))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_me() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(request("GET", "/api/user/me", Some(&user.cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User data retrieved successfully");
    assert_eq!(body["data"]["email"], user.email.as_str());
    assert_eq!(body["data"]["username"], user.username.as_str());
    assert_eq!(body["data"]["age"], 30);
}

#[tokio::test]
async fn test_update_me() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(json_request(
            "PUT",
            "/api/user/me",
            json!({ "firstName": "Augusta", "age": 36, "username": "countess" }),
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["data"]["firstName"], "Augusta");
    assert_eq!(body["data"]["lastName"], "User");
    assert_eq!(body["data"]["age"], 36);
    assert_eq!(body["data"]["username"], "countess");
    assert_eq!(body["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_update_me_keeps_own_username() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(json_request(
            "PUT",
            "/api/user/me",
            json!({ "username": "ada" }),
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_me_rejects_taken_username() {
    let app = TestApp::new();
    app.register("ada", "ada@example.com").await;
    let grace = app.register("grace", "grace@example.com").await;

    let response = app
        .send(json_request(
            "PUT",
            "/api/user/me",
            json!({ "username": "ada" }),
            Some(&grace.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    crate::assert_failure!(body_json(response).await, "Username already taken");
}

#[tokio::test]
async fn test_update_me_validation() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(json_request(
            "PUT",
            "/api/user/me",
            json!({ "age": 5 }),
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    crate::assert_failure!(body_json(response).await, "Must be at least 13 years old");
}

#[tokio::test]
async fn test_delete_me() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(request("DELETE", "/api/user/me", Some(&user.cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = set_cookie_header(&response).expect("delete clears the cookie");
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(response).await;
    assert_eq!(body["message"], "User deleted successfully");
    assert!(app.store.is_empty().await);

    // The token is still valid, but the record behind it is gone
    let response = app
        .send(request("GET", "/api/user/me", Some(&user.cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    crate::assert_failure!(body_json(response).await, "User not found");

    let response = app
        .send(request("DELETE", "/api/user/me", Some(&user.cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_profile_picture() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(multipart_request(
            "/api/user/profile-picture",
            &[file_part("me.png", "image/png", PNG_BYTES)],
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Profile picture uploaded successfully");
    let url = body["data"]["profilePictureUrl"]
        .as_str()
        .expect("picture url")
        .to_string();
    assert!(url.starts_with(&format!("/uploads/{}-", user.id)), "url: {url}");
    assert!(url.ends_with(".png"), "url: {url}");

    let file_name = url.trim_start_matches("/uploads/");
    let stored = std::fs::read(app.upload_dir.join(file_name)).expect("file written");
    assert_eq!(stored, PNG_BYTES);

    // Served back from the upload directory
    let response = app.send(request("GET", &url, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, PNG_BYTES);

    // And recorded on the profile
    let response = app
        .send(request("GET", "/api/user/me", Some(&user.cookie)))
        .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["profilePictureUrl"], url.as_str());
}

#[tokio::test]
async fn test_upload_defaults_extension() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(multipart_request(
            "/api/user/profile-picture",
            &[file_part("camera-upload", "image/jpeg", b"jpeg-bytes")],
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let url = body["data"]["profilePictureUrl"].as_str().unwrap();
    assert!(url.ends_with(".jpg"), "url: {url}");
}

#[tokio::test]
async fn test_upload_rejects_bad_content_type() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(multipart_request(
            "/api/user/profile-picture",
            &[file_part("notes.txt", "text/plain", b"hello")],
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    crate::assert_failure!(
        body_json(response).await,
        "Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed."
    );

    assert!(!app.upload_dir.exists());
}

#[tokio::test]
async fn test_upload_requires_file() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(multipart_request(
            "/api/user/profile-picture",
            &[Part {
                name: "caption",
                file_name: None,
                content_type: None,
                data: b"my picture",
            }],
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    crate::assert_failure!(body_json(response).await, "No file provided");
}

#[tokio::test]
async fn test_upload_rejects_non_multipart_body() {
    let app = TestApp::new();
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(json_request(
            "POST",
            "/api/user/profile-picture",
            json!({}),
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    crate::assert_failure!(body, "Invalid upload request");
    assert!(body["error"].is_string());
    assert!(!app.upload_dir.exists());
}

/// Deletes the user when the picture URL is written, as a concurrent
/// account deletion would
struct VanishingUserStore(Arc<MemoryUserStore>);

#[async_trait]
impl UserStore for VanishingUserStore {
    async fn find_by_field(
        &self,
        field: UserField,
        value: &str,
    ) -> Result<Option<User>, StoreError> {
        self.0.find_by_field(field, value).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.0.find_by_id(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        self.0.create(user).await
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        _update: UserUpdate,
    ) -> Result<Option<User>, StoreError> {
        self.0.delete_by_id(id).await?;
        Ok(None)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.0.delete_by_id(id).await
    }

    async fn close(&self) {}
}

#[tokio::test]
async fn test_upload_removes_file_when_user_vanishes() {
    let app = TestApp::with_store(|store| Arc::new(VanishingUserStore(store)));
    let user = app.register("ada", "ada@example.com").await;

    let response = app
        .send(multipart_request(
            "/api/user/profile-picture",
            &[file_part("me.png", "image/png", PNG_BYTES)],
            Some(&user.cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    crate::assert_failure!(body_json(response).await, "User not found");

    let leftover = std::fs::read_dir(&app.upload_dir)
        .expect("upload dir was created for the write")
        .count();
    assert_eq!(leftover, 0);
}

#[tokio::test]
async fn test_upload_requires_session() {
    let app = TestApp::new();

    let response = app
        .send(multipart_request(
            "/api/user/profile-picture",
            &[file_part("me.png", "image/png", PNG_BYTES)],
            None,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
