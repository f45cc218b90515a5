//! `tradelot-store` — the document-store collaborator.
//!
//! Collections expose `insert_one` / `find_one` / `find` style operations,
//! individually atomic and insertion-ordered. Nothing here is transactional
//! across collections; readers of multiple collections must tolerate read
//! skew (the join engine does, by treating unresolved references as
//! non-matches).

pub mod collection;
pub mod error;
pub mod market;
pub mod revocation;

pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use market::MarketStore;
pub use revocation::{RevocationEntry, RevocationLedger};
