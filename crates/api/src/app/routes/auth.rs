//! Identity routes: register, login, logout, password change, profile.

use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};

use tradelot_core::Role;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    // Resolve the role tag once, before anything else, so an unknown role is
    // an `invalid_role`, not a generic deserialization failure.
    let declared = body.get("role").and_then(|r| r.as_str()).unwrap_or("");
    if declared.parse::<Role>().is_err() {
        return errors::invalid_role(declared);
    }

    let req: dto::RegisterRequest = match serde_json::from_value(body) {
        Ok(req) => req,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string());
        }
    };

    match services.register(req) {
        Ok(role) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "registered successfully",
                "role": role,
            })),
        )
            .into_response(),
        Err(e) => errors::register_error_to_response(e),
    }
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let role: Role = match body.role.parse() {
        Ok(role) => role,
        Err(_) => return errors::invalid_role(&body.role),
    };

    match services.login(role, &body.email, &body.secret) {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "token": token,
                "role": role,
            })),
        )
            .into_response(),
        Err(e) => errors::login_error_to_response(e),
    }
}

pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
) -> axum::response::Response {
    match services.logout(&ctx) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "logged out successfully" })),
        )
            .into_response(),
        Err(e) => errors::store_unavailable(e),
    }
}

pub async fn change_password(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Json(body): Json<dto::ChangeSecretRequest>,
) -> axum::response::Response {
    match services.change_secret(&ctx, &body.new_secret) {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "password updated successfully" })),
        )
            .into_response(),
        // Authenticated but no record: the principal's collection row is
        // gone, which this API never does; report it rather than 500.
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "principal not found"),
        Err(e) => errors::register_error_to_response(e),
    }
}

pub async fn profile(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
) -> axum::response::Response {
    match services.profile(&ctx) {
        Ok(Some(principal)) => (StatusCode::OK, Json(principal)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "principal not found"),
        Err(e) => errors::store_unavailable(e),
    }
}
