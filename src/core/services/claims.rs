//! Claim service - submission, history and deletion
//!
//! Orchestrates the classifier, the catalogue and a [`ClaimStore`]. Identity
//! is passed in by the caller as `Option<&UserId>`; `None` means anonymous.

use chrono::Utc;
use log::{debug, info};
use thiserror::Error;

use super::super::models::{Claim, ClaimId, NewClaim, UserId};
use super::super::ports::{ClaimStore, RandomSource, StoreError};
use super::catalog;
use super::classifier::classify;

/// Maximum number of claims returned by [`ClaimService::list`]
pub const HISTORY_LIMIT: usize = 20;

/// Maximum number of claims returned by [`ClaimService::recent`]
pub const RECENT_LIMIT: usize = 5;

/// Errors surfaced by claim operations
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The operation needs a signed-in user
    #[error("Not authenticated")]
    Unauthenticated,

    /// The claim does not exist or belongs to someone else
    #[error("Claim not found")]
    NotFound,

    /// Storage backend failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Claim operations over a store
pub struct ClaimService {
    store: Box<dyn ClaimStore>,
}

impl std::fmt::Debug for ClaimService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimService").finish_non_exhaustive()
    }
}

impl ClaimService {
    /// Create a service backed by `store`
    #[must_use]
    pub fn new(store: Box<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Classify and persist a claim for the caller
    ///
    /// The text is stored as given. One insert is performed; a store failure
    /// propagates unchanged and leaves nothing behind.
    pub fn submit(
        &self,
        caller: Option<&UserId>,
        text: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<Claim, ClaimError> {
        let owner = caller.ok_or(ClaimError::Unauthenticated)?;

        let classification = classify(text, rng);
        let witty_remark = catalog::remark_for(classification.verdict, rng);
        let bonus_fact = catalog::bonus_fact(rng);
        let now = Utc::now();

        let claim = self.store.insert(NewClaim {
            text: text.to_string(),
            owner: owner.clone(),
            verdict: classification.verdict,
            explanation: classification.explanation.to_string(),
            witty_remark: witty_remark.to_string(),
            bonus_fact: bonus_fact.to_string(),
            created_at: now,
            processed_at: now,
        })?;

        debug!(
            "claim {} by {} classified as {} (rule {:?})",
            claim.id, owner, claim.verdict, classification.rule
        );
        Ok(claim)
    }

    /// The caller's most recent claims, newest first
    ///
    /// Anonymous callers get an empty list rather than an error.
    pub fn list(&self, caller: Option<&UserId>) -> Result<Vec<Claim>, ClaimError> {
        match caller {
            Some(owner) => Ok(self.store.list_by_owner(owner, HISTORY_LIMIT)?),
            None => Ok(Vec::new()),
        }
    }

    /// The newest claims across all users
    pub fn recent(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.list_recent(RECENT_LIMIT)?)
    }

    /// Fetch one of the caller's claims
    pub fn get(&self, caller: Option<&UserId>, id: ClaimId) -> Result<Claim, ClaimError> {
        let owner = caller.ok_or(ClaimError::Unauthenticated)?;
        self.owned(owner, id)
    }

    /// Delete one of the caller's claims
    pub fn remove(&self, caller: Option<&UserId>, id: ClaimId) -> Result<(), ClaimError> {
        let owner = caller.ok_or(ClaimError::Unauthenticated)?;
        self.owned(owner, id)?;

        if !self.store.delete(id)? {
            // Vanished between lookup and delete
            return Err(ClaimError::NotFound);
        }
        info!("claim {id} removed by {owner}");
        Ok(())
    }

    fn owned(&self, owner: &UserId, id: ClaimId) -> Result<Claim, ClaimError> {
        match self.store.get(id)? {
            Some(claim) if claim.is_owned_by(owner) => Ok(claim),
            _ => Err(ClaimError::NotFound),
        }
    }
}
