//! `tradelot-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! business-key identifiers, the canonical role enum, and the marketplace
//! entity records shared by the store, the join engine, and the API.

pub mod entities;
pub mod error;
pub mod id;
pub mod role;

pub use entities::{Deal, DealDetails, DealStatus, Principal, Vehicle};
pub use error::{DomainError, DomainResult};
pub use id::{DealId, PrincipalId, VehicleId};
pub use role::Role;
