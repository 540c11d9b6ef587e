//! Tests for the claim service against a misbehaving store

use cosmic_truth::core::models::{Claim, ClaimId, NewClaim, UserId};
use cosmic_truth::core::ports::{ClaimStore, StoreError};
use cosmic_truth::core::services::{ClaimError, ClaimService};

use crate::common::{ScriptedRandom, alice};

/// Store whose writes always fail
struct BrokenStore;

impl ClaimStore for BrokenStore {
    fn insert(&self, _claim: NewClaim) -> Result<Claim, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn get(&self, _id: ClaimId) -> Result<Option<Claim>, StoreError> {
        Ok(None)
    }

    fn list_by_owner(&self, _owner: &UserId, _limit: usize) -> Result<Vec<Claim>, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn list_recent(&self, _limit: usize) -> Result<Vec<Claim>, StoreError> {
        Ok(Vec::new())
    }

    fn delete(&self, _id: ClaimId) -> Result<bool, StoreError> {
        Ok(false)
    }
}

#[test]
fn test_store_failure_propagates() {
    let service = ClaimService::new(Box::new(BrokenStore));
    let err = service
        .submit(Some(&alice()), "dark matter", &mut ScriptedRandom::always(0))
        .unwrap_err();
    assert!(matches!(err, ClaimError::Store(StoreError::Poisoned)));

    let err = service.list(Some(&alice())).unwrap_err();
    assert!(matches!(err, ClaimError::Store(_)));
}

#[test]
fn test_unauthenticated_submit_never_touches_store() {
    let service = ClaimService::new(Box::new(BrokenStore));
    let err = service
        .submit(None, "dark matter", &mut ScriptedRandom::always(0))
        .unwrap_err();
    assert!(matches!(err, ClaimError::Unauthenticated));
}

#[test]
fn test_remove_missing_claim_is_not_found() {
    let service = ClaimService::new(Box::new(BrokenStore));
    let err = service.remove(Some(&alice()), ClaimId::new(9)).unwrap_err();
    assert!(matches!(err, ClaimError::NotFound));
    assert_eq!(err.to_string(), "Claim not found");
}
