//! Request context for authenticated calls.

use chrono::{DateTime, Utc};

use tradelot_core::{PrincipalId, Role};

/// Authenticated caller identity, derived from verified claims by the
/// authentication gate.
///
/// Handlers take the principal key from here and **never** from request
/// input, which is what makes cross-tenant reads structurally impossible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    principal_id: PrincipalId,
    role: Role,
    raw_token: String,
    expires_at: DateTime<Utc>,
}

impl AuthContext {
    pub fn new(
        principal_id: PrincipalId,
        role: Role,
        raw_token: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            principal_id,
            role,
            raw_token,
            expires_at,
        }
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The exact token string the caller presented; revocation records this
    /// verbatim.
    pub fn raw_token(&self) -> &str {
        &self.raw_token
    }

    /// Natural expiry of the presented token (bounds the revocation entry).
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
