/**
 * Password Hashing
 *
 * Thin wrapper over bcrypt. Hashing and verification run on the blocking
 * thread pool so a slow hash does not stall the async workers.
 */

use thiserror::Error;

/// Default bcrypt cost factor
pub const DEFAULT_COST: u32 = 10;

/// Failure while hashing a password
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a plaintext password with the given cost
pub async fn hash_password(plaintext: &str, cost: u32) -> Result<String, PasswordError> {
    let plaintext = plaintext.to_owned();
    let digest = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
    Ok(digest)
}

/// Compare a plaintext password with a stored digest
///
/// A malformed digest counts as a mismatch.
pub async fn verify_password(plaintext: &str, digest: &str) -> bool {
    let plaintext = plaintext.to_owned();
    let digest = digest.to_owned();

    match tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest)).await {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::warn!("Password verification error: {:?}", e);
            false
        }
        Err(e) => {
            tracing::error!("Password verification task failed: {:?}", e);
            false
        }
    }
}
