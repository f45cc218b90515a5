//! Revocation ledger for session tokens.
//!
//! Bridges the gap between "stateless token" and "can be logged out": a
//! signed token's bytes never change after logout, so invalidity has to be
//! recorded here and consulted on every protected call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::StoreResult;

/// One revoked token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationEntry {
    /// The exact presented token string.
    pub token: String,
    pub revoked_at: DateTime<Utc>,
    /// The token's natural expiry; entries past it are sweepable, since an
    /// expired token already fails signature-window verification.
    pub expires_at: DateTime<Utc>,
}

/// Append-only set of tokens that must be rejected despite being
/// cryptographically valid.
#[derive(Debug)]
pub struct RevocationLedger {
    entries: Collection<RevocationEntry>,
}

impl RevocationLedger {
    pub fn new() -> Self {
        Self {
            entries: Collection::new("revoked-tokens"),
        }
    }

    /// Record `token` as revoked. Idempotent: revoking an already-revoked
    /// token is a no-op, including under concurrent calls.
    pub fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> StoreResult<()> {
        let entry = RevocationEntry {
            token: token.to_string(),
            revoked_at: Utc::now(),
            expires_at,
        };
        self.entries
            .insert_one_if_absent(|e| e.token == token, entry)?;
        Ok(())
    }

    /// Membership check against all ever-revoked (unswept) tokens.
    pub fn is_revoked(&self, token: &str) -> StoreResult<bool> {
        Ok(self.entries.find_one(|e| e.token == token)?.is_some())
    }

    /// Drop entries whose token has passed its natural expiry. Returns how
    /// many entries were removed.
    pub fn sweep(&self, now: DateTime<Utc>) -> StoreResult<usize> {
        let swept = self.entries.remove_where(|e| e.expires_at <= now)?;
        if swept > 0 {
            tracing::debug!(swept, "swept expired revocation entries");
        }
        Ok(swept)
    }

    pub fn len(&self) -> StoreResult<usize> {
        self.entries.count()
    }
}

impl Default for RevocationLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn revoke_then_membership() {
        let ledger = RevocationLedger::new();
        let exp = Utc::now() + Duration::hours(1);

        assert!(!ledger.is_revoked("tok-1").unwrap());
        ledger.revoke("tok-1", exp).unwrap();
        assert!(ledger.is_revoked("tok-1").unwrap());
        assert!(!ledger.is_revoked("tok-2").unwrap());
    }

    #[test]
    fn double_revoke_equals_single_revoke() {
        let ledger = RevocationLedger::new();
        let exp = Utc::now() + Duration::hours(1);

        ledger.revoke("tok-1", exp).unwrap();
        ledger.revoke("tok-1", exp).unwrap();
        assert_eq!(ledger.len().unwrap(), 1);
    }

    #[test]
    fn sweep_drops_only_expired_entries() {
        let ledger = RevocationLedger::new();
        let now = Utc::now();

        ledger.revoke("old", now - Duration::minutes(5)).unwrap();
        ledger.revoke("live", now + Duration::hours(1)).unwrap();

        assert_eq!(ledger.sweep(now).unwrap(), 1);
        assert!(!ledger.is_revoked("old").unwrap());
        assert!(ledger.is_revoked("live").unwrap());
    }

    #[test]
    fn concurrent_revokes_insert_once() {
        use std::sync::Arc;

        let ledger = Arc::new(RevocationLedger::new());
        let exp = Utc::now() + Duration::hours(1);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || ledger.revoke("tok-1", exp).unwrap())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(ledger.len().unwrap(), 1);
    }
}
