//! Vehicle routes: listing insert, public catalogue, per-caller view.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use tradelot_core::Vehicle;
use tradelot_views::my_vehicles_view;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub async fn create_vehicle(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateVehicleRequest>,
) -> axum::response::Response {
    let vehicle = Vehicle {
        vehicle_id: body.vehicle_id,
        kind: body.kind,
        name: body.name,
        model: body.model,
        details: body.details,
    };

    match services.store().vehicles.insert_one(vehicle) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "vehicle created successfully" })),
        )
            .into_response(),
        Err(e) => errors::store_unavailable(e),
    }
}

pub async fn list_vehicles(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().vehicles.find(|_| true) {
        Ok(vehicles) => (StatusCode::OK, Json(vehicles)).into_response(),
        Err(e) => errors::store_unavailable(e),
    }
}

/// The caller's own vehicles with owning-deal details attached.
///
/// The principal key comes from the verified claims in [`AuthContext`]; a
/// client-supplied id is structurally impossible here.
pub async fn my_vehicles(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
) -> axum::response::Response {
    match my_vehicles_view(services.store(), ctx.principal_id()) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => errors::store_unavailable(e),
    }
}
