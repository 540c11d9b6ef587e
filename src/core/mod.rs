//! Core domain logic for cosmic-truth
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Claim, Verdict, Rule, Fact)
//! - `services/` - Classification and claim orchestration
//! - `ports/` - Trait definitions for storage, identity and randomness

pub mod models;
pub mod ports;
pub mod services;
