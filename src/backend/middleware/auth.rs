/**
 * Authenticated User Extractor
 *
 * API handlers take `CurrentUser` as a parameter to require a session. The
 * extractor reads the `auth-token` cookie and verifies it on every request,
 * independently of the access guard. It does not check that the user still
 * exists; handlers that load the record answer 404 when it is gone.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::cookies::extract_token;
use crate::backend::auth::sessions::{IdentityClaims, TokenService};
use crate::backend::error::ApiError;

/// Identity of the caller, taken from a verified session token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub claims: IdentityClaims,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = Arc::<TokenService>::from_ref(state);

        let token = extract_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing auth-token cookie");
            ApiError::Unauthorized
        })?;

        let claims = tokens.verify(&token).ok_or_else(|| {
            tracing::warn!("Invalid session token");
            ApiError::Unauthorized
        })?;

        let id = Uuid::parse_str(&claims.user_id).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            ApiError::Unauthorized
        })?;

        Ok(Self { id, claims })
    }
}
