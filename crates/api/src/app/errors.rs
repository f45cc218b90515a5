//! Consistent JSON error responses.
//!
//! The error taxonomy the API exposes is small: an opaque 401
//! for every authentication failure, 400 for a role outside the closed enum,
//! 503 for a store that cannot serve the request (retryable), and nothing at
//! all for join-time integrity gaps — those are logged and absorbed by the
//! views.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tradelot_store::StoreError;

use crate::app::services::{LoginError, RegisterError};

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// The single opaque authentication failure. Missing, malformed, forged,
/// expired, and revoked tokens — and bad login credentials — all produce
/// exactly this response.
pub fn unauthenticated() -> axum::response::Response {
    json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "Unauthorized")
}

pub fn invalid_role(role: &str) -> axum::response::Response {
    json_error(
        StatusCode::BAD_REQUEST,
        "invalid_role",
        format!("role must be 'individual' or 'dealership', got '{role}'"),
    )
}

/// Transient store failure; safe for the caller to retry.
pub fn store_unavailable(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store unavailable");
    json_error(
        StatusCode::SERVICE_UNAVAILABLE,
        "store_unavailable",
        "backing store unavailable, retry later",
    )
}

pub fn login_error_to_response(err: LoginError) -> axum::response::Response {
    match err {
        // Unknown email and wrong secret map to the same response.
        LoginError::InvalidCredentials => unauthenticated(),
        LoginError::Store(e) => store_unavailable(e),
        LoginError::Internal(msg) => {
            tracing::error!(error = %msg, "login failed internally");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal Server Error",
            )
        }
    }
}

pub fn register_error_to_response(err: RegisterError) -> axum::response::Response {
    match err {
        RegisterError::Duplicate => json_error(
            StatusCode::CONFLICT,
            "conflict",
            "a principal with this id or email already exists",
        ),
        RegisterError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        RegisterError::Store(e) => store_unavailable(e),
        RegisterError::Internal(msg) => {
            tracing::error!(error = %msg, "registration failed internally");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal Server Error",
            )
        }
    }
}
