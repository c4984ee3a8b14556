/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens that carry a
 * user's identity between requests. Tokens are HS256 JWTs valid for 7 days;
 * there is no server-side session record.
 *
 * Verification collapses every failure (bad signature, malformed token,
 * expiry) into `None`. The reason is only visible in debug logs.
 */

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime in seconds (7 days)
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Identity carried inside a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityClaims {
    /// User ID (UUID string)
    pub user_id: String,
    pub email: String,
    pub username: String,
}

/// Full JWT payload: identity plus registered time claims
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    #[serde(flatten)]
    identity: IdentityClaims,
    /// Expiration time (Unix timestamp)
    exp: i64,
    /// Issued at time (Unix timestamp)
    iat: i64,
}

/// Issues and verifies session tokens with a process-wide secret
///
/// Built once at startup and shared read-only through `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service for the given signing secret
    pub fn new(secret: &[u8]) -> Self {
        // Expiry is checked against the caller's clock in `verify_at`, so the
        // library check is disabled. `exp` is still required to be present.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Create a token for the given identity, expiring 7 days from now
    pub fn issue(&self, claims: &IdentityClaims) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(claims, Utc::now())
    }

    /// Create a token as if issued at `now`
    pub fn issue_at(
        &self,
        claims: &IdentityClaims,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = now.timestamp();
        let payload = TokenClaims {
            identity: claims.clone(),
            exp: iat + TOKEN_TTL_SECS,
            iat,
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding)
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Option<IdentityClaims> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token's signature and check it has not expired at `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Option<IdentityClaims> {
        let data = match decode::<TokenClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("Token rejected: {:?}", e.kind());
                return None;
            }
        };

        if now.timestamp() >= data.claims.exp {
            tracing::debug!("Token rejected: expired at {}", data.claims.exp);
            return None;
        }

        Some(data.claims.identity)
    }
}
