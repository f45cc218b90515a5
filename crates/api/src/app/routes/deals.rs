//! Deal routes: deal insert and the public sold-vehicles view.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use tradelot_core::Deal;
use tradelot_views::sold_vehicles_view;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn create_deal(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateDealRequest>,
) -> axum::response::Response {
    let deal = Deal {
        deal_id: body.deal_id,
        vehicle_id: body.vehicle_id,
        deal_details: body.deal_details,
    };

    match services.store().deals.insert_one(deal) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "deal created successfully" })),
        )
            .into_response(),
        Err(e) => errors::store_unavailable(e),
    }
}

/// Every sold deal joined with its vehicle and buyer. No authentication:
/// the sold listing is a public storefront view.
pub async fn sold_vehicles(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match sold_vehicles_view(services.store()) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => errors::store_unavailable(e),
    }
}
