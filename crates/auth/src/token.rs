//! Token issuance and verification (HS256).
//!
//! Stateless: a single verification depends only on the secret key and the
//! token bytes. Revocation is a separate, store-backed concern.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use thiserror::Error;

use tradelot_core::{PrincipalId, Role};

use crate::claims::Claims;

/// Why a presented token failed verification.
///
/// Callers at the HTTP boundary must collapse all three to one opaque
/// "unauthenticated" signal; the distinction exists for logs and tests only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("token is not decodable")]
    Malformed,

    #[error("token signature is invalid")]
    BadSignature,

    #[error("token has expired")]
    Expired,
}

/// Issues and verifies signed session tokens.
///
/// Built once at startup from process configuration and injected wherever
/// tokens are handled; tests construct their own with a test secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Mint a signed token asserting `principal_id` + `role` until the
    /// configured ttl elapses.
    pub fn issue(
        &self,
        principal_id: &PrincipalId,
        role: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: principal_id.clone(),
            role,
            jti: uuid::Uuid::new_v4().to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => VerificationError::Expired,
                ErrorKind::InvalidSignature => VerificationError::BadSignature,
                _ => VerificationError::Malformed,
            })?;

        Ok(data.claims)
    }
}
