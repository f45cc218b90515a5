//! Request DTOs.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use tradelot_core::{DealDetails, DealId, PrincipalId, VehicleId};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Declared role; resolved against the closed enum by the handler so an
    /// unknown spelling maps to `invalid_role`, not a serde rejection.
    pub role: String,
    pub email: String,
    pub secret: String,
}

/// Registration payload: a closed tagged union over the two principal kinds,
/// resolved once at the boundary.
#[derive(Debug, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RegisterRequest {
    Individual(RegisterIndividual),
    Dealership(RegisterDealership),
}

#[derive(Debug, Deserialize)]
pub struct RegisterIndividual {
    pub principal_id: PrincipalId,
    pub email: String,
    pub secret: String,
    pub location: Option<String>,
    pub info: Option<JsonValue>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterDealership {
    pub principal_id: PrincipalId,
    pub name: String,
    pub email: String,
    pub secret: String,
    pub location: Option<String>,
    pub info: Option<JsonValue>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeSecretRequest {
    pub new_secret: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub vehicle_id: VehicleId,
    pub kind: String,
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub details: JsonValue,
}

#[derive(Debug, Deserialize)]
pub struct CreateDealRequest {
    pub deal_id: DealId,
    pub vehicle_id: VehicleId,
    #[serde(default)]
    pub deal_details: DealDetails,
}
