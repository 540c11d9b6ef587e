//! Claim store port
//!
//! Defines the interface for persisting claims.

use thiserror::Error;

use super::super::models::{Claim, ClaimId, NewClaim, UserId};

/// Failure inside a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("malformed claim data: {0}")]
    Json(#[from] serde_json::Error),

    /// A previous writer panicked while holding the store lock
    #[error("claim store lock poisoned")]
    Poisoned,
}

/// Repository for claims
///
/// Implementations own id assignment and keep both lookups (by owner, by
/// recency) ordered newest first.
pub trait ClaimStore: Send + Sync {
    /// Persist a claim, returning it with its assigned id
    fn insert(&self, claim: NewClaim) -> Result<Claim, StoreError>;

    /// Fetch a claim by id
    fn get(&self, id: ClaimId) -> Result<Option<Claim>, StoreError>;

    /// Claims owned by `owner`, newest first, at most `limit`
    fn list_by_owner(&self, owner: &UserId, limit: usize) -> Result<Vec<Claim>, StoreError>;

    /// Claims across all owners, newest first, at most `limit`
    fn list_recent(&self, limit: usize) -> Result<Vec<Claim>, StoreError>;

    /// Delete a claim, returning whether it existed
    fn delete(&self, id: ClaimId) -> Result<bool, StoreError>;
}
