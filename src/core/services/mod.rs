//! Business logic services
//!
//! - [`classifier`] - Map claim text to a verdict
//! - [`catalog`] - Static rules, remark pools and facts
//! - [`claims`] - Submit, list and remove claims over a store

pub mod catalog;
pub mod claims;
pub mod classifier;

pub use claims::{ClaimError, ClaimService, HISTORY_LIMIT, RECENT_LIMIT};
pub use classifier::{Classification, classify, matching_rule};
