//! Shared helpers for unit tests
//!
//! - [`ScriptedRandom`] - Random source replaying fixed draws
//! - [`memory_state`] - API state over an in-memory store with two users

use cosmic_truth::adapters::{MemoryClaimStore, TokenIdentity};
use cosmic_truth::api::ApiState;
use cosmic_truth::core::models::UserId;
use cosmic_truth::core::ports::RandomSource;

/// Replays a fixed list of draws, wrapping each into range
pub struct ScriptedRandom {
    draws: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }

    /// Always draws `value`
    pub fn always(value: usize) -> Self {
        Self::new(&[value])
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value % len
    }
}

pub fn alice() -> UserId {
    UserId::new("alice").unwrap()
}

pub fn bob() -> UserId {
    UserId::new("bob").unwrap()
}

pub fn memory_state() -> ApiState {
    ApiState::new(
        Box::new(MemoryClaimStore::new()),
        Box::new(TokenIdentity::new([("alice-token", "alice"), ("bob-token", "bob")])),
    )
}
