//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory` - In-process claim store
//! - `json_file` - Claim store persisted as a JSON ledger
//! - `token` - Static bearer-token identity provider
//! - `random` - `fastrand` random source

pub mod json_file;
pub mod memory;
mod random;
pub mod token;

pub use json_file::JsonFileClaimStore;
pub use memory::MemoryClaimStore;
pub use token::{TokenIdentity, bearer_token};
