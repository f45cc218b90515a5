//! Service wiring and request-level orchestration.
//!
//! `AppServices` owns the store and the token service; handlers reach both
//! through one `Extension<Arc<AppServices>>`. The flows with real sequencing
//! (login, register, logout, password change) live here so the route files
//! stay thin.

use std::sync::Arc;

use thiserror::Error;

use tradelot_auth::{CredentialError, TokenService, hash_secret, verify_secret};
use tradelot_core::{Principal, Role};
use tradelot_store::{MarketStore, StoreError};

use crate::app::dto::RegisterRequest;
use crate::context::AuthContext;

#[derive(Debug, Error)]
pub enum LoginError {
    /// Unknown email or wrong secret; callers must not learn which.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("principal id or email already registered for this role")]
    Duplicate,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    Internal(String),
}

pub struct AppServices {
    store: Arc<MarketStore>,
    tokens: TokenService,
}

impl AppServices {
    pub fn new(store: Arc<MarketStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    pub fn store(&self) -> &MarketStore {
        &self.store
    }

    pub fn store_handle(&self) -> Arc<MarketStore> {
        Arc::clone(&self.store)
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Authenticate credentials and mint a session token.
    pub fn login(&self, role: Role, email: &str, secret: &str) -> Result<String, LoginError> {
        let principal = self
            .store
            .principals(role)
            .find_one(|p| p.email == email)?
            .ok_or(LoginError::InvalidCredentials)?;

        match verify_secret(secret, &principal.credential_digest) {
            Ok(true) => {}
            Ok(false) | Err(CredentialError::EmptySecret) => {
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(LoginError::Internal(e.to_string())),
        }

        self.tokens
            .issue(&principal.principal_id, role)
            .map_err(|e| LoginError::Internal(e.to_string()))
    }

    /// Create a principal in the collection its role owns.
    ///
    /// `principal_id` and `email` are each unique within the role; the
    /// membership check and the insert run under one collection lock.
    pub fn register(&self, req: RegisterRequest) -> Result<Role, RegisterError> {
        let principal = match req {
            RegisterRequest::Individual(p) => Principal {
                principal_id: p.principal_id,
                email: p.email,
                credential_digest: digest_for(&p.secret)?,
                role: Role::Individual,
                name: None,
                location: p.location,
                info: p.info,
            },
            RegisterRequest::Dealership(p) => Principal {
                principal_id: p.principal_id,
                email: p.email,
                credential_digest: digest_for(&p.secret)?,
                role: Role::Dealership,
                name: Some(p.name),
                location: p.location,
                info: p.info,
            },
        };

        let role = principal.role;
        let id = principal.principal_id.clone();
        let email = principal.email.clone();
        let inserted = self.store.principals(role).insert_one_if_absent(
            |existing| existing.principal_id == id || existing.email == email,
            principal,
        )?;

        if inserted { Ok(role) } else { Err(RegisterError::Duplicate) }
    }

    /// Re-hash and store a new secret for the authenticated caller's own
    /// record, located by (role, principal id) from verified claims.
    pub fn change_secret(&self, ctx: &AuthContext, new_secret: &str) -> Result<bool, RegisterError> {
        let digest = digest_for(new_secret)?;
        let id = ctx.principal_id().clone();

        Ok(self.store.principals(ctx.role()).update_one(
            |p| p.principal_id == id,
            |p| p.credential_digest = digest,
        )?)
    }

    /// Full principal record for the caller (claims carry only the minimal
    /// identity, so detail is re-fetched here).
    pub fn profile(&self, ctx: &AuthContext) -> Result<Option<Principal>, StoreError> {
        let id = ctx.principal_id().clone();
        self.store
            .principals(ctx.role())
            .find_one(|p| p.principal_id == id)
    }

    /// Record the caller's token as revoked for the rest of its natural
    /// expiry window.
    pub fn logout(&self, ctx: &AuthContext) -> Result<(), StoreError> {
        self.store
            .revocations
            .revoke(ctx.raw_token(), ctx.expires_at())
    }
}

fn digest_for(secret: &str) -> Result<String, RegisterError> {
    hash_secret(secret).map_err(|e| match e {
        CredentialError::EmptySecret => RegisterError::Validation("secret must not be empty".into()),
        other => RegisterError::Internal(other.to_string()),
    })
}
