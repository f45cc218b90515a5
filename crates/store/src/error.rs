//! Store error model.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure.
///
/// There is exactly one failure mode at this layer: the backing store could
/// not serve the operation. It is transient from the caller's point of view
/// and safe to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
