//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::core::models::{ClaimId, FactCategory, UserId};
use crate::core::ports::RandomSource;
use crate::core::services::{catalog, classify};

use super::error::ApiError;
use super::state::ApiState;
use super::types::{
    ClaimCreateData, ClaimDeleteData, ClaimItem, ClaimsData, ClassifyData, ClassifyRequest,
    ExamplesData, FactItem, FactsData, StatusData, SubmitClaimRequest,
};

// =============================================================================
// STATUS
// =============================================================================

/// Get server status
pub fn get_status(state: &ApiState) -> Result<StatusData, ApiError> {
    Ok(StatusData {
        version: crate::VERSION.to_string(),
        rules: catalog::RULES.len(),
        facts: catalog::all_facts().len(),
        max_claim_chars: state.max_claim_chars(),
    })
}

// =============================================================================
// CLAIMS
// =============================================================================

/// Submit a claim for classification
pub fn submit_claim(
    state: &ApiState,
    caller: Option<&UserId>,
    req: &SubmitClaimRequest,
    rng: &mut dyn RandomSource,
) -> Result<ClaimCreateData, ApiError> {
    if caller.is_none() {
        return Err(ApiError::unauthenticated("Not authenticated"));
    }

    let text = validate_text(state, &req.text)?;
    let claim = state.claims().submit(caller, text, rng)?;

    Ok(ClaimCreateData {
        id: claim.id.to_string(),
        claim: claim.into(),
    })
}

/// List the caller's claims (empty when anonymous)
pub fn list_claims(state: &ApiState, caller: Option<&UserId>) -> Result<ClaimsData, ApiError> {
    let claims = state.claims().list(caller)?;
    Ok(ClaimsData {
        claims: claims.into_iter().map(ClaimItem::from).collect(),
    })
}

/// List the newest claims across all users
pub fn recent_claims(state: &ApiState) -> Result<ClaimsData, ApiError> {
    let claims = state.claims().recent()?;
    Ok(ClaimsData {
        claims: claims.into_iter().map(ClaimItem::from).collect(),
    })
}

/// Get one of the caller's claims
pub fn get_claim(state: &ApiState, caller: Option<&UserId>, id: &str) -> Result<ClaimItem, ApiError> {
    if caller.is_none() {
        return Err(ApiError::unauthenticated("Not authenticated"));
    }
    let id = parse_claim_id(id)?;
    Ok(state.claims().get(caller, id)?.into())
}

/// Delete one of the caller's claims
pub fn delete_claim(
    state: &ApiState,
    caller: Option<&UserId>,
    id: &str,
) -> Result<ClaimDeleteData, ApiError> {
    if caller.is_none() {
        return Err(ApiError::unauthenticated("Not authenticated"));
    }
    let id = parse_claim_id(id)?;
    state.claims().remove(caller, id)?;
    Ok(ClaimDeleteData {
        id: id.to_string(),
        deleted: true,
    })
}

/// Classify text without storing anything
pub fn classify_text(
    req: &ClassifyRequest,
    rng: &mut dyn RandomSource,
) -> Result<ClassifyData, ApiError> {
    let result = classify(&req.text, rng);
    Ok(ClassifyData {
        verdict: result.verdict.to_string(),
        explanation: result.explanation.to_string(),
        fallback: result.is_fallback(),
    })
}

// =============================================================================
// FACTS
// =============================================================================

/// List facts, optionally filtered by category
pub fn list_facts(category: Option<&str>) -> Result<FactsData, ApiError> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(name) => {
            let category: FactCategory = name.parse().map_err(ApiError::bad_request)?;
            Ok(FactsData {
                category: Some(category.to_string()),
                facts: catalog::facts_in(category).into_iter().map(FactItem::from).collect(),
            })
        },
        None => Ok(FactsData {
            category: None,
            facts: catalog::all_facts().iter().copied().map(FactItem::from).collect(),
        }),
    }
}

/// Pick one fact at random
pub fn random_fact(rng: &mut dyn RandomSource) -> Result<FactItem, ApiError> {
    catalog::random_fact(rng)
        .map(FactItem::from)
        .ok_or_else(|| ApiError::internal("Fact table is empty"))
}

/// Example claims for prompting
pub fn list_examples() -> Result<ExamplesData, ApiError> {
    Ok(ExamplesData {
        examples: catalog::example_claims().iter().map(ToString::to_string).collect(),
    })
}

// =============================================================================
// HELPERS
// =============================================================================

fn validate_text<'a>(state: &ApiState, text: &'a str) -> Result<&'a str, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::bad_request("Claim text cannot be empty"));
    }
    let max = state.max_claim_chars();
    if max > 0 && text.chars().count() > max {
        return Err(ApiError::bad_request(format!(
            "Claim text exceeds {max} characters"
        )));
    }
    Ok(text)
}

fn parse_claim_id(id: &str) -> Result<ClaimId, ApiError> {
    id.parse()
        .map_err(|_| ApiError::not_found(format!("Claim '{id}' not found")))
}
