//! Credential hashing and verification using argon2id.
//!
//! One-way, salted, deliberately expensive. The work factor is the argon2id
//! default and is not surfaced to callers.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("secret must not be empty")]
    EmptySecret,

    #[error("credential hashing failed: {0}")]
    Hash(String),

    #[error("stored digest is malformed: {0}")]
    MalformedDigest(String),
}

/// Hash a secret into a storable PHC-format digest (random salt).
pub fn hash_secret(secret: &str) -> Result<String, CredentialError> {
    if secret.is_empty() {
        return Err(CredentialError::EmptySecret);
    }

    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| CredentialError::Hash(e.to_string()))?;
    Ok(digest.to_string())
}

/// Verify a secret against a stored digest.
///
/// A mismatch is `Ok(false)`; only a malformed digest is an error.
pub fn verify_secret(secret: &str, digest: &str) -> Result<bool, CredentialError> {
    if secret.is_empty() {
        return Err(CredentialError::EmptySecret);
    }

    let parsed = PasswordHash::new(digest)
        .map_err(|e| CredentialError::MalformedDigest(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}
