//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients (CLI, tests).
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod state;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    classify_text, delete_claim, get_claim, get_status, list_claims, list_examples, list_facts,
    random_fact, recent_claims, submit_claim,
};
pub use state::{ApiState, DEFAULT_MAX_CLAIM_CHARS};
pub use types::{
    ApiResponse, ClaimCreateData, ClaimDeleteData, ClaimItem, ClaimsData, ClassifyData,
    ClassifyRequest, ExamplesData, FactItem, FactsData, StatusData, SubmitClaimRequest,
};
