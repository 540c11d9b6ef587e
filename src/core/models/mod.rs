//! Domain models for cosmic-truth
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Claim`] - A submitted claim plus its classification
//! - [`Verdict`] - The outcome label of a classification
//! - [`Rule`] - Substring condition mapped to a verdict
//! - [`Fact`] - Static cosmic trivia

mod claim;
mod fact;
mod rule;
mod verdict;

pub use claim::{Claim, ClaimId, NewClaim, UserId, sort_newest_first};
pub use fact::{Fact, FactCategory};
pub use rule::{Condition, Rule};
pub use verdict::Verdict;
