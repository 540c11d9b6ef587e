//! In-memory claim store
//!
//! Used by tests and by `storage.backend = "memory"`. Contents vanish with the
//! process.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::core::models::{Claim, ClaimId, NewClaim, UserId, sort_newest_first};
use crate::core::ports::{ClaimStore, StoreError};

#[derive(Debug, Default)]
struct MemoryState {
    last_seq: u64,
    claims: BTreeMap<ClaimId, Claim>,
}

/// Claim store held in process memory
#[derive(Debug, Default)]
pub struct MemoryClaimStore {
    state: Mutex<MemoryState>,
}

impl MemoryClaimStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> Result<T, StoreError> {
        let mut state = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut state))
    }
}

fn newest<'a>(claims: impl Iterator<Item = &'a Claim>, limit: usize) -> Vec<Claim> {
    let mut selected: Vec<Claim> = claims.cloned().collect();
    sort_newest_first(&mut selected);
    selected.truncate(limit);
    selected
}

impl ClaimStore for MemoryClaimStore {
    fn insert(&self, claim: NewClaim) -> Result<Claim, StoreError> {
        self.with_state(|state| {
            state.last_seq += 1;
            let stored = claim.with_id(ClaimId::new(state.last_seq));
            state.claims.insert(stored.id, stored.clone());
            stored
        })
    }

    fn get(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        self.with_state(|state| state.claims.get(&id).cloned())
    }

    fn list_by_owner(&self, owner: &UserId, limit: usize) -> Result<Vec<Claim>, StoreError> {
        self.with_state(|state| {
            newest(state.claims.values().filter(|c| c.is_owned_by(owner)), limit)
        })
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<Claim>, StoreError> {
        self.with_state(|state| newest(state.claims.values(), limit))
    }

    fn delete(&self, id: ClaimId) -> Result<bool, StoreError> {
        self.with_state(|state| state.claims.remove(&id).is_some())
    }
}
