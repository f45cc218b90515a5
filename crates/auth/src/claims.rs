//! Signed token claims (transport-agnostic).

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use tradelot_core::{PrincipalId, Role};

/// Claims embedded in a session token.
///
/// Deliberately minimal: the token asserts *who* the caller is (`sub` + role)
/// and nothing more. The full principal record — in particular the credential
/// digest — stays in the store and is re-fetched when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the principal's business key.
    pub sub: PrincipalId,

    /// Role the principal authenticated as.
    pub role: Role,

    /// Token id (unique per issuance).
    pub jti: String,

    /// Issued-at (unix seconds).
    pub iat: i64,

    /// Expiration (unix seconds).
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}
