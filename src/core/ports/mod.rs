//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (storage backends, identity, randomness).
//!
//! Implementations live in the `adapters` module.

mod claim_store;
mod identity;
mod random;

pub use claim_store::{ClaimStore, StoreError};
pub use identity::IdentityProvider;
pub use random::{RandomSource, choose};
