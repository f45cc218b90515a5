//! Marketplace entity records.
//!
//! These are plain documents: the store persists them verbatim and the join
//! engine correlates them on business keys. A `Deal` is the only entity that
//! links a `Vehicle` to an owning `Principal` — there is no direct
//! vehicle-to-principal field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::{DealId, PrincipalId, Role, VehicleId};

/// A person or dealership trading on the marketplace.
///
/// # Invariants
/// - `principal_id` is unique within its role's collection.
/// - `email` is unique within its role's collection.
/// - The credential digest is opaque and never serialized outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub email: String,
    /// Opaque PHC-format digest. Never leaves the process in a response or a
    /// token.
    #[serde(skip_serializing, default)]
    pub credential_digest: String,
    pub role: Role,
    /// Display name (dealerships carry one; individuals may not).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form profile details supplied at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<JsonValue>,
}

/// A vehicle listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: VehicleId,
    pub kind: String,
    pub name: String,
    pub model: String,
    /// Free-form listing details.
    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub details: JsonValue,
}

/// Lifecycle status of a deal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    #[default]
    Open,
    Sold,
}

impl DealStatus {
    pub fn is_sold(&self) -> bool {
        matches!(self, DealStatus::Sold)
    }
}

/// Deal details: status plus, once sold, the buying principal's business key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DealDetails {
    #[serde(default)]
    pub status: DealStatus,
    /// Buyer business key; only present on sold deals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<PrincipalId>,
    /// Anything else the writing side attached to the deal.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// A deal linking a vehicle to its (eventual) buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub deal_id: DealId,
    /// Foreign business key into the vehicles collection.
    pub vehicle_id: VehicleId,
    pub deal_details: DealDetails,
}
