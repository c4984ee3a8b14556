/**
 * Error Conversion
 *
 * `ApiError` implements `IntoResponse`, so handlers return it directly.
 * The body is the standard envelope:
 *
 * ```json
 * { "success": false, "message": "Unauthorized" }
 * { "success": false, "message": "Login failed", "error": "database error: ..." }
 * ```
 */

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;
use crate::shared::ApiResponse;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = ApiResponse::<()>::failure(self.message(), self.detail());
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Upload {
            status: rejection.status(),
            message: "Invalid upload request".to_string(),
            detail: Some(rejection.body_text()),
        }
    }
}
