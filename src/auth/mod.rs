use thiserror::Error;

use crate::config;

/// Errors from password hashing and verification
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash a plaintext password with the configured bcrypt work factor.
///
/// bcrypt is CPU-bound, so the hash runs on the blocking pool and the
/// caller suspends until it completes, same as a database round trip.
pub async fn hash_password(plain: String) -> Result<String, PasswordError> {
    let cost = config::config().security.bcrypt_cost;
    tokio::task::spawn_blocking(move || hash_with_cost(&plain, cost)).await?
}

/// Verify a plaintext password against a stored bcrypt hash.
pub async fn verify_password(plain: String, hash: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || Ok(bcrypt::verify(plain, &hash)?)).await?
}

fn hash_with_cost(plain: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(plain, cost)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps the tests fast; production cost comes
    // from config.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_with_cost("secreto123", TEST_COST).unwrap();
        assert_ne!(hash, "secreto123");
        assert!(bcrypt::verify("secreto123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = hash_with_cost("secreto123", TEST_COST).unwrap();
        assert!(!bcrypt::verify("otra-clave", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_with_cost("secreto123", TEST_COST).unwrap();
        let b = hash_with_cost("secreto123", TEST_COST).unwrap();
        assert_ne!(a, b);
    }
}
