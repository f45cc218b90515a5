//! `tradelot-views` — derived-view composition (the join engine).
//!
//! Reconstructs relational structure across the vehicle, deal, and principal
//! collections on business keys, at query time, read-only. The collections
//! are independently written and never jointly transactional, so an
//! unresolved reference is a non-match, never an error.

pub mod resolution;
pub mod views;

pub use resolution::Resolution;
pub use views::{OwnedVehicleEntry, SoldVehicleEntry, my_vehicles_view, sold_vehicles_view};
