//! JSON file claim store
//!
//! All claims live in a single pretty-printed JSON ledger. Every operation
//! reads the ledger under a mutex; mutations write it back before returning.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::core::models::{Claim, ClaimId, NewClaim, UserId, sort_newest_first};
use crate::core::ports::{ClaimStore, StoreError};

/// Ledger filename inside the data directory
pub const CLAIMS_FILE: &str = "claims.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Ledger {
    /// Highest sequence number ever assigned
    #[serde(default)]
    last_seq: u64,
    #[serde(default)]
    claims: Vec<Claim>,
}

/// Claim store persisted as a JSON file
#[derive(Debug)]
pub struct JsonFileClaimStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileClaimStore {
    /// Store backed by `<data_dir>/claims.json`
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(CLAIMS_FILE))
    }

    /// Store backed by an explicit ledger path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Ledger path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Ledger, StoreError> {
        if !self.path.exists() {
            return Ok(Ledger::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Ledger::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(ledger)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(Ledger) -> T) -> Result<T, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(self.load()?))
    }

    fn update<T>(&self, f: impl FnOnce(&mut Ledger) -> T) -> Result<T, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut ledger = self.load()?;
        let out = f(&mut ledger);
        self.save(&ledger)?;
        Ok(out)
    }
}

fn newest(mut claims: Vec<Claim>, limit: usize) -> Vec<Claim> {
    sort_newest_first(&mut claims);
    claims.truncate(limit);
    claims
}

impl ClaimStore for JsonFileClaimStore {
    fn insert(&self, claim: NewClaim) -> Result<Claim, StoreError> {
        self.update(|ledger| {
            // Guard against hand-edited ledgers whose counter lags behind
            let max_seen = ledger.claims.iter().map(|c| c.id.seq()).max().unwrap_or(0);
            ledger.last_seq = ledger.last_seq.max(max_seen) + 1;
            let stored = claim.with_id(ClaimId::new(ledger.last_seq));
            ledger.claims.push(stored.clone());
            stored
        })
    }

    fn get(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        self.read(|ledger| ledger.claims.into_iter().find(|c| c.id == id))
    }

    fn list_by_owner(&self, owner: &UserId, limit: usize) -> Result<Vec<Claim>, StoreError> {
        self.read(|ledger| {
            let owned = ledger.claims.into_iter().filter(|c| c.is_owned_by(owner)).collect();
            newest(owned, limit)
        })
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<Claim>, StoreError> {
        self.read(|ledger| newest(ledger.claims, limit))
    }

    fn delete(&self, id: ClaimId) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut ledger = self.load()?;
        let before = ledger.claims.len();
        ledger.claims.retain(|c| c.id != id);
        if ledger.claims.len() == before {
            return Ok(false);
        }
        self.save(&ledger)?;
        Ok(true)
    }
}
