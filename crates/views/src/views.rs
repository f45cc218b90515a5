//! The two derived views.
//!
//! Both are pure functions of current collection contents, recomputed on
//! every call (correctness over staleness; no cache). Both apply the same
//! inner-join policy: a deal or vehicle whose counterpart cannot be resolved
//! is omitted, and ambiguous business keys collapse to the first match in
//! insertion order with a warning.

use serde::Serialize;

use tradelot_core::{DealDetails, DealId, Principal, Vehicle, VehicleId};
use tradelot_store::{MarketStore, StoreResult};

use crate::resolution::Resolution;

/// One row of the global sold-vehicles view: deal, vehicle, and buyer joined
/// on business keys.
#[derive(Debug, Clone, Serialize)]
pub struct SoldVehicleEntry {
    pub deal_id: DealId,
    pub vehicle_id: VehicleId,
    pub vehicle: Vehicle,
    pub owner: Principal,
}

/// One row of a principal's my-vehicles view: the vehicle plus its owning
/// deal's details.
#[derive(Debug, Clone, Serialize)]
pub struct OwnedVehicleEntry {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub dealer_info: DealDetails,
}

/// Every sold deal joined with its vehicle and its (individual) buyer.
///
/// Output order follows deal insertion order. Deals whose vehicle or buyer
/// reference does not resolve are excluded.
pub fn sold_vehicles_view(store: &MarketStore) -> StoreResult<Vec<SoldVehicleEntry>> {
    let sold = store.deals.find(|d| d.deal_details.status.is_sold())?;

    let mut entries = Vec::with_capacity(sold.len());
    for deal in sold {
        let vehicle = store
            .vehicles
            .find(|v| v.vehicle_id == deal.vehicle_id)
            .map(Resolution::from_matches)?;
        let Some(vehicle) = collapse(vehicle, "vehicles", deal.vehicle_id.as_str(), &deal.deal_id)
        else {
            continue;
        };

        let Some(buyer_id) = deal.deal_details.buyer.clone() else {
            tracing::warn!(
                deal_id = %deal.deal_id,
                "sold deal has no buyer reference; omitting from view"
            );
            continue;
        };
        let owner = store
            .principals(tradelot_core::Role::Individual)
            .find(|p| p.principal_id == buyer_id)
            .map(Resolution::from_matches)?;
        let Some(owner) = collapse(owner, "principals-individual", buyer_id.as_str(), &deal.deal_id)
        else {
            continue;
        };

        entries.push(SoldVehicleEntry {
            deal_id: deal.deal_id,
            vehicle_id: deal.vehicle_id,
            vehicle,
            owner,
        });
    }

    Ok(entries)
}

/// Every vehicle whose owning deal names `principal_id` as buyer, with the
/// deal's details attached.
///
/// The caller passes the principal key from **verified claims**, never from
/// request input; there is no way to ask this view about someone else.
pub fn my_vehicles_view(
    store: &MarketStore,
    principal_id: &tradelot_core::PrincipalId,
) -> StoreResult<Vec<OwnedVehicleEntry>> {
    let vehicles = store.vehicles.find(|_| true)?;

    let mut entries = Vec::new();
    for vehicle in vehicles {
        let deal = store
            .deals
            .find(|d| d.vehicle_id == vehicle.vehicle_id)
            .map(Resolution::from_matches)?;
        if deal.is_ambiguous() {
            tracing::warn!(
                vehicle_id = %vehicle.vehicle_id,
                "multiple deals reference one vehicle; using first in insertion order"
            );
        }
        let Some(deal) = deal.into_first() else {
            continue;
        };

        if deal.deal_details.buyer.as_ref() == Some(principal_id) {
            entries.push(OwnedVehicleEntry {
                vehicle,
                dealer_info: deal.deal_details,
            });
        }
    }

    Ok(entries)
}

/// Apply the view-boundary collapse of a [`Resolution`], logging integrity
/// gaps. `None` means the enclosing record is omitted.
fn collapse<T>(
    resolution: Resolution<T>,
    collection: &'static str,
    key: &str,
    deal_id: &DealId,
) -> Option<T> {
    if resolution.is_ambiguous() {
        tracing::warn!(
            collection,
            key,
            deal_id = %deal_id,
            "ambiguous business key; using first match in insertion order"
        );
    }
    let resolved = resolution.into_first();
    if resolved.is_none() {
        tracing::warn!(
            collection,
            key,
            deal_id = %deal_id,
            "unresolved reference; omitting record from view"
        );
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradelot_core::{Deal, DealStatus, PrincipalId, Role};

    fn vehicle(id: &str, name: &str) -> Vehicle {
        Vehicle {
            vehicle_id: VehicleId::new(id),
            kind: "car".to_string(),
            name: name.to_string(),
            model: "2021".to_string(),
            details: serde_json::Value::Null,
        }
    }

    fn deal(id: &str, vehicle_id: &str, status: DealStatus, buyer: Option<&str>) -> Deal {
        Deal {
            deal_id: DealId::new(id),
            vehicle_id: VehicleId::new(vehicle_id),
            deal_details: DealDetails {
                status,
                buyer: buyer.map(PrincipalId::new),
                extra: Default::default(),
            },
        }
    }

    fn individual(store: &MarketStore, id: &str) {
        store
            .principals(Role::Individual)
            .insert_one(Principal {
                principal_id: PrincipalId::new(id),
                email: format!("{id}@example.com"),
                credential_digest: String::new(),
                role: Role::Individual,
                name: None,
                location: None,
                info: None,
            })
            .unwrap();
    }

    #[test]
    fn sold_view_joins_deal_vehicle_and_owner() {
        let store = MarketStore::new();
        store.vehicles.insert_one(vehicle("V1", "Corolla")).unwrap();
        individual(&store, "U1");
        store
            .deals
            .insert_one(deal("D1", "V1", DealStatus::Sold, Some("U1")))
            .unwrap();

        let view = sold_vehicles_view(&store).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].deal_id, DealId::new("D1"));
        assert_eq!(view[0].vehicle.name, "Corolla");
        assert_eq!(view[0].owner.principal_id, PrincipalId::new("U1"));
    }

    #[test]
    fn sold_view_excludes_unsold_deals() {
        let store = MarketStore::new();
        store.vehicles.insert_one(vehicle("V1", "Corolla")).unwrap();
        individual(&store, "U1");
        store
            .deals
            .insert_one(deal("D1", "V1", DealStatus::Open, Some("U1")))
            .unwrap();

        assert!(sold_vehicles_view(&store).unwrap().is_empty());
    }

    #[test]
    fn sold_view_is_inner_join_on_vehicle() {
        let store = MarketStore::new();
        individual(&store, "U1");
        store
            .deals
            .insert_one(deal("D1", "V1", DealStatus::Sold, Some("U1")))
            .unwrap();

        // No matching vehicle record: the deal is omitted, not an error.
        assert!(sold_vehicles_view(&store).unwrap().is_empty());
    }

    #[test]
    fn sold_view_is_inner_join_on_buyer() {
        let store = MarketStore::new();
        store.vehicles.insert_one(vehicle("V1", "Corolla")).unwrap();
        store
            .deals
            .insert_one(deal("D1", "V1", DealStatus::Sold, Some("ghost")))
            .unwrap();
        store
            .deals
            .insert_one(deal("D2", "V1", DealStatus::Sold, None))
            .unwrap();

        assert!(sold_vehicles_view(&store).unwrap().is_empty());
    }

    #[test]
    fn ambiguous_vehicle_key_uses_first_inserted() {
        let store = MarketStore::new();
        store.vehicles.insert_one(vehicle("V1", "first")).unwrap();
        store.vehicles.insert_one(vehicle("V1", "second")).unwrap();
        individual(&store, "U1");
        store
            .deals
            .insert_one(deal("D1", "V1", DealStatus::Sold, Some("U1")))
            .unwrap();

        let view = sold_vehicles_view(&store).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].vehicle.name, "first");
    }

    #[test]
    fn sold_view_order_follows_deal_insertion_order() {
        let store = MarketStore::new();
        store.vehicles.insert_one(vehicle("V1", "a")).unwrap();
        store.vehicles.insert_one(vehicle("V2", "b")).unwrap();
        individual(&store, "U1");
        store
            .deals
            .insert_one(deal("D2", "V2", DealStatus::Sold, Some("U1")))
            .unwrap();
        store
            .deals
            .insert_one(deal("D1", "V1", DealStatus::Sold, Some("U1")))
            .unwrap();

        let ids: Vec<_> = sold_vehicles_view(&store)
            .unwrap()
            .into_iter()
            .map(|e| e.deal_id)
            .collect();
        assert_eq!(ids, vec![DealId::new("D2"), DealId::new("D1")]);
    }

    #[test]
    fn my_vehicles_only_returns_the_callers_vehicles() {
        let store = MarketStore::new();
        store.vehicles.insert_one(vehicle("V1", "mine")).unwrap();
        store.vehicles.insert_one(vehicle("V2", "theirs")).unwrap();
        store.vehicles.insert_one(vehicle("V3", "unsold")).unwrap();
        store
            .deals
            .insert_one(deal("D1", "V1", DealStatus::Sold, Some("U1")))
            .unwrap();
        store
            .deals
            .insert_one(deal("D2", "V2", DealStatus::Sold, Some("U2")))
            .unwrap();

        let mine = my_vehicles_view(&store, &PrincipalId::new("U1")).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].vehicle.name, "mine");
        assert_eq!(mine[0].dealer_info.buyer, Some(PrincipalId::new("U1")));
    }

    #[test]
    fn my_vehicles_ignores_vehicles_without_a_deal() {
        let store = MarketStore::new();
        store.vehicles.insert_one(vehicle("V1", "floating")).unwrap();

        assert!(my_vehicles_view(&store, &PrincipalId::new("U1"))
            .unwrap()
            .is_empty());
    }
}
