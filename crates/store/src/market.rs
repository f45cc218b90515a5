//! The marketplace document store: one handle owning every named collection.

use tradelot_core::{Deal, Principal, Role, Vehicle};

use crate::collection::Collection;
use crate::revocation::RevocationLedger;

/// All collections backing the marketplace.
///
/// The two principal kinds share no storage identity space, so individuals
/// and dealerships live in separate collections and every principal lookup is
/// role-scoped.
#[derive(Debug)]
pub struct MarketStore {
    individuals: Collection<Principal>,
    dealerships: Collection<Principal>,
    pub vehicles: Collection<Vehicle>,
    pub deals: Collection<Deal>,
    pub revocations: RevocationLedger,
}

impl MarketStore {
    pub fn new() -> Self {
        Self {
            individuals: Collection::new("principals-individual"),
            dealerships: Collection::new("principals-dealership"),
            vehicles: Collection::new("vehicles"),
            deals: Collection::new("deals"),
            revocations: RevocationLedger::new(),
        }
    }

    /// The principal collection for a role. Every principal read and write
    /// goes through this, which is what makes role-scoped uniqueness hold.
    pub fn principals(&self, role: Role) -> &Collection<Principal> {
        match role {
            Role::Individual => &self.individuals,
            Role::Dealership => &self.dealerships,
        }
    }
}

impl Default for MarketStore {
    fn default() -> Self {
        Self::new()
    }
}
