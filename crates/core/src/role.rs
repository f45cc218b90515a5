//! Canonical principal roles.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The two disjoint principal kinds of the marketplace.
///
/// This is a **closed** enum: every boundary (login, registration, claims,
/// password change) resolves a role through it exactly once, so a request
/// declaring anything else fails early instead of falling through. The
/// serialized spelling is canonical — there is no `"dealer"` alias.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Individual,
    Dealership,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Individual => "individual",
            Role::Dealership => "dealership",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Role::Individual),
            "dealership" => Ok(Role::Dealership),
            other => Err(DomainError::invalid_role(other)),
        }
    }
}
