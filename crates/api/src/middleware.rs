//! The authentication gate.
//!
//! Signature validity is necessary but never sufficient: a structurally
//! valid token may have been revoked at logout, and its bytes never change
//! afterwards. So every protected request runs the full sequence — extract,
//! verify, consult the revocation ledger — before any handler sees it.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::AuthContext;

#[derive(Clone)]
pub struct AuthState {
    pub services: Arc<AppServices>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    // Malformed, bad-signature, expired, and revoked all collapse to the
    // same opaque 401; the caller learns nothing about which check failed.
    let token = extract_bearer(req.headers())
        .ok_or_else(errors::unauthenticated)?
        .to_string();

    let claims = state.services.tokens().verify(&token).map_err(|e| {
        tracing::debug!(error = %e, "token failed verification");
        errors::unauthenticated()
    })?;

    let revoked = state
        .services
        .store()
        .revocations
        .is_revoked(&token)
        .map_err(errors::store_unavailable)?;
    if revoked {
        tracing::debug!(principal = %claims.sub, "revoked token presented");
        return Err(errors::unauthenticated());
    }

    let expires_at = claims.expires_at();
    req.extensions_mut()
        .insert(AuthContext::new(claims.sub, claims.role, token, expires_at));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
