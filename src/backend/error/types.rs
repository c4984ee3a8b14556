/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler. Each
 * variant knows its status code and the message shown to the client, so call
 * sites branch on the variant instead of parsing strings.
 *
 * # Error Categories
 *
 * - `Unauthorized` / `InvalidCredentials` - missing, forged or expired
 *   session, or a failed login. Expired and forged tokens look the same.
 * - `Validation` - bad input (400)
 * - `NotFound` - the record behind a valid session is gone (404)
 * - `Upload` - profile picture upload problems
 * - `Store` / `Internal` - failures of collaborators (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Handler error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid session token
    #[error("Unauthorized")]
    Unauthorized,

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Request failed validation
    #[error("{message}")]
    Validation { message: String },

    /// Referenced record does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Profile picture upload failure
    #[error("{message}")]
    Upload {
        status: StatusCode,
        message: String,
        detail: Option<String>,
    },

    /// Credential store failure
    #[error("{context}: {source}")]
    Store {
        /// Client-facing summary, e.g. "Registration failed"
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// Any other server-side failure
    #[error("{context}: {detail}")]
    Internal {
        context: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The "User not found" error shared by the profile handlers
    pub fn user_not_found() -> Self {
        Self::not_found("User not found")
    }

    /// Wrap a store failure
    ///
    /// Unique-constraint conflicts become validation errors carrying the
    /// field's "already taken" message.
    pub fn store(context: &'static str, source: StoreError) -> Self {
        match source {
            StoreError::Conflict { field } => Self::validation(field.taken_message()),
            source => Self::Store { context, source },
        }
    }

    /// Wrap any other internal failure
    pub fn internal(context: &'static str, detail: impl std::fmt::Display) -> Self {
        Self::Internal {
            context,
            detail: detail.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upload { status, .. } => *status,
            Self::Store { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client
    pub fn message(&self) -> String {
        match self {
            Self::Store { context, .. } | Self::Internal { context, .. } => context.to_string(),
            other => other.to_string(),
        }
    }

    /// Underlying detail for server-side failures
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Store { source, .. } => Some(source.to_string()),
            Self::Internal { detail, .. } => Some(detail.clone()),
            Self::Upload { detail, .. } => detail.clone(),
            _ => None,
        }
    }
}
