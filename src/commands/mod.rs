//! Command implementations

mod claim;
mod classify;
mod context;
mod facts;
mod serve;

pub use claim::claim_cmd;
pub use classify::classify;
pub use context::Context;
pub use facts::{examples, facts};
pub use serve::serve;
