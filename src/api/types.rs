//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::core::models::{Claim, Fact};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for submitting a claim
#[derive(Debug, Deserialize)]
pub struct SubmitClaimRequest {
    /// Claim text
    pub text: String,
}

/// Request body for a dry-run classification
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Text to classify
    pub text: String,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Status endpoint response data
#[derive(Debug, Clone, Serialize)]
pub struct StatusData {
    /// Server version
    pub version: String,
    /// Number of classification rules
    pub rules: usize,
    /// Number of seeded facts
    pub facts: usize,
    /// Configured claim length limit (0 = unlimited)
    pub max_claim_chars: usize,
}

/// A claim as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct ClaimItem {
    /// Claim ID (`CLM-<n>`)
    pub id: String,
    /// Claim text
    pub text: String,
    /// Owner user id
    pub owner: String,
    /// Verdict (verified, debunked, `cosmic_mystery`)
    pub verdict: String,
    /// Explanation of the verdict
    pub explanation: String,
    /// Witty remark
    pub witty_remark: String,
    /// Bonus trivia
    pub bonus_fact: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Processing timestamp (RFC3339)
    pub processed_at: String,
}

impl From<Claim> for ClaimItem {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            text: claim.text,
            owner: claim.owner.to_string(),
            verdict: claim.verdict.to_string(),
            explanation: claim.explanation,
            witty_remark: claim.witty_remark,
            bonus_fact: claim.bonus_fact,
            created_at: claim.created_at.to_rfc3339(),
            processed_at: claim.processed_at.to_rfc3339(),
        }
    }
}

/// Response for claim submission
#[derive(Debug, Serialize)]
pub struct ClaimCreateData {
    /// Created claim ID
    pub id: String,
    /// The stored claim
    pub claim: ClaimItem,
}

/// Claims list response data
#[derive(Debug, Serialize)]
pub struct ClaimsData {
    /// Claims, newest first
    pub claims: Vec<ClaimItem>,
}

/// Response for claim deletion
#[derive(Debug, Serialize)]
pub struct ClaimDeleteData {
    /// Deleted claim ID
    pub id: String,
    /// Always true on success
    pub deleted: bool,
}

/// Dry-run classification response
#[derive(Debug, Serialize)]
pub struct ClassifyData {
    /// Verdict
    pub verdict: String,
    /// Explanation
    pub explanation: String,
    /// Whether the verdict came from the random fallback
    pub fallback: bool,
}

/// Single fact
#[derive(Debug, Clone, Serialize)]
pub struct FactItem {
    /// Headline
    pub title: String,
    /// Fact text
    pub body: String,
    /// Category name
    pub category: String,
    /// Attribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<Fact> for FactItem {
    fn from(fact: Fact) -> Self {
        Self {
            title: fact.title.to_string(),
            body: fact.body.to_string(),
            category: fact.category.to_string(),
            source: fact.source.map(String::from),
        }
    }
}

/// Facts list response
#[derive(Debug, Serialize)]
pub struct FactsData {
    /// Category filter applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Matching facts in seed order
    pub facts: Vec<FactItem>,
}

/// Example claims response
#[derive(Debug, Serialize)]
pub struct ExamplesData {
    /// Prompt suggestions
    pub examples: Vec<String>,
}
