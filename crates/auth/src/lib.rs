//! `tradelot-auth` — pure authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: credential
//! hashing and token issuance/verification are deterministic given their
//! inputs. Revocation (the stateful half of "logout") lives in the store
//! crate; composing the two is the API layer's job.

pub mod claims;
pub mod password;
pub mod token;

pub use claims::Claims;
pub use password::{CredentialError, hash_secret, verify_secret};
pub use token::{TokenService, VerificationError};
