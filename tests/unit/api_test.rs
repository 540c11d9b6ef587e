//! Tests for the HTTP-agnostic API handlers

use cosmic_truth::api::{
    self, ClassifyRequest, DEFAULT_MAX_CLAIM_CHARS, ErrorCode, SubmitClaimRequest,
};
use cosmic_truth::core::models::UserId;

use crate::common::{ScriptedRandom, alice, bob, memory_state};

fn submit(state: &cosmic_truth::api::ApiState, who: &UserId, text: &str) -> String {
    let req = SubmitClaimRequest {
        text: text.to_string(),
    };
    api::submit_claim(state, Some(who), &req, &mut ScriptedRandom::always(0))
        .unwrap()
        .id
}

// =============================================================================
// Submit
// =============================================================================

#[test]
fn test_submit_flat_earth_is_debunked() {
    let state = memory_state();
    let req = SubmitClaimRequest {
        text: "The Earth is flat... flat earth forever".to_string(),
    };
    let data =
        api::submit_claim(&state, Some(&alice()), &req, &mut ScriptedRandom::always(1)).unwrap();

    assert_eq!(data.id, "CLM-1");
    assert_eq!(data.claim.verdict, "debunked");
    assert_eq!(data.claim.owner, "alice");
    assert!(!data.claim.witty_remark.is_empty());
    assert!(!data.claim.bonus_fact.is_empty());
    assert_eq!(data.claim.created_at, data.claim.processed_at);
}

#[test]
fn test_submit_speed_of_light_is_verified() {
    let state = memory_state();
    let req = SubmitClaimRequest {
        text: "The speed of light is constant".to_string(),
    };
    let data =
        api::submit_claim(&state, Some(&bob()), &req, &mut ScriptedRandom::always(2)).unwrap();
    assert_eq!(data.claim.verdict, "verified");
}

#[test]
fn test_submit_trims_text() {
    let state = memory_state();
    let req = SubmitClaimRequest {
        text: "   dark matter is real \n".to_string(),
    };
    let data =
        api::submit_claim(&state, Some(&alice()), &req, &mut ScriptedRandom::always(0)).unwrap();
    assert_eq!(data.claim.text, "dark matter is real");
}

#[test]
fn test_submit_anonymous_is_unauthenticated() {
    let state = memory_state();
    let req = SubmitClaimRequest {
        text: "The sun is yellow".to_string(),
    };
    let err = api::submit_claim(&state, None, &req, &mut ScriptedRandom::always(0)).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unauthenticated);
    assert_eq!(err.status_code(), 401);

    // Nothing was stored
    assert!(api::recent_claims(&state).unwrap().claims.is_empty());
}

#[test]
fn test_submit_blank_text_rejected() {
    let state = memory_state();
    let req = SubmitClaimRequest {
        text: "  \t ".to_string(),
    };
    let err =
        api::submit_claim(&state, Some(&alice()), &req, &mut ScriptedRandom::always(0)).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
}

#[test]
fn test_submit_length_limit() {
    let state = memory_state();
    let long = "a".repeat(DEFAULT_MAX_CLAIM_CHARS + 1);
    let req = SubmitClaimRequest { text: long };
    let err =
        api::submit_claim(&state, Some(&alice()), &req, &mut ScriptedRandom::always(0)).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);

    // Exactly at the limit is fine, counted in characters
    let req = SubmitClaimRequest {
        text: "é".repeat(DEFAULT_MAX_CLAIM_CHARS),
    };
    assert!(api::submit_claim(&state, Some(&alice()), &req, &mut ScriptedRandom::always(0)).is_ok());
}

#[test]
fn test_submit_unlimited_when_zero() {
    let state = memory_state().with_max_claim_chars(0);
    let req = SubmitClaimRequest {
        text: "b".repeat(DEFAULT_MAX_CLAIM_CHARS * 4),
    };
    assert!(api::submit_claim(&state, Some(&alice()), &req, &mut ScriptedRandom::always(0)).is_ok());
}

#[test]
fn test_ids_are_sequential() {
    let state = memory_state();
    assert_eq!(submit(&state, &alice(), "one"), "CLM-1");
    assert_eq!(submit(&state, &bob(), "two"), "CLM-2");
    assert_eq!(submit(&state, &alice(), "three"), "CLM-3");
}

// =============================================================================
// List / recent
// =============================================================================

#[test]
fn test_list_only_own_claims_newest_first() {
    let state = memory_state();
    submit(&state, &alice(), "first");
    submit(&state, &bob(), "bob's claim");
    submit(&state, &alice(), "second");

    let claims = api::list_claims(&state, Some(&alice())).unwrap().claims;
    let ids: Vec<&str> = claims.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CLM-3", "CLM-1"]);
    assert!(claims.iter().all(|c| c.owner == "alice"));
}

#[test]
fn test_list_anonymous_is_empty() {
    let state = memory_state();
    submit(&state, &alice(), "something");
    assert!(api::list_claims(&state, None).unwrap().claims.is_empty());
}

#[test]
fn test_list_capped_at_history_limit() {
    let state = memory_state();
    for i in 0..25 {
        submit(&state, &alice(), &format!("claim {i}"));
    }
    let claims = api::list_claims(&state, Some(&alice())).unwrap().claims;
    assert_eq!(claims.len(), 20);
    assert_eq!(claims[0].id, "CLM-25");
}

#[test]
fn test_recent_spans_users_and_caps_at_five() {
    let state = memory_state();
    for i in 0..4 {
        submit(&state, &alice(), &format!("alice {i}"));
        submit(&state, &bob(), &format!("bob {i}"));
    }
    let claims = api::recent_claims(&state).unwrap().claims;
    let ids: Vec<&str> = claims.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CLM-8", "CLM-7", "CLM-6", "CLM-5", "CLM-4"]);
}

// =============================================================================
// Get / delete
// =============================================================================

#[test]
fn test_get_own_claim() {
    let state = memory_state();
    let id = submit(&state, &alice(), "dark energy");
    let claim = api::get_claim(&state, Some(&alice()), &id).unwrap();
    assert_eq!(claim.text, "dark energy");

    // Lower-case and bare numeric ids also resolve
    assert!(api::get_claim(&state, Some(&alice()), "clm-1").is_ok());
    assert!(api::get_claim(&state, Some(&alice()), "1").is_ok());
}

#[test]
fn test_get_other_users_claim_is_not_found() {
    let state = memory_state();
    let id = submit(&state, &alice(), "mine");
    let err = api::get_claim(&state, Some(&bob()), &id).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[test]
fn test_get_malformed_id_is_not_found() {
    let state = memory_state();
    let err = api::get_claim(&state, Some(&alice()), "not-an-id").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert!(err.message.contains("not-an-id"));
}

#[test]
fn test_delete_requires_ownership() {
    let state = memory_state();
    let id = submit(&state, &alice(), "to be deleted");

    let err = api::delete_claim(&state, Some(&bob()), &id).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    // Still there for alice
    assert_eq!(api::list_claims(&state, Some(&alice())).unwrap().claims.len(), 1);

    let data = api::delete_claim(&state, Some(&alice()), &id).unwrap();
    assert!(data.deleted);
    assert_eq!(data.id, "CLM-1");
    assert!(api::list_claims(&state, Some(&alice())).unwrap().claims.is_empty());
}

#[test]
fn test_delete_twice_is_not_found() {
    let state = memory_state();
    let id = submit(&state, &alice(), "once");
    api::delete_claim(&state, Some(&alice()), &id).unwrap();
    let err = api::delete_claim(&state, Some(&alice()), &id).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[test]
fn test_delete_anonymous_is_unauthenticated() {
    let state = memory_state();
    let id = submit(&state, &alice(), "keep me");
    let err = api::delete_claim(&state, None, &id).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unauthenticated);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let state = memory_state();
    let first = submit(&state, &alice(), "first");
    api::delete_claim(&state, Some(&alice()), &first).unwrap();
    assert_eq!(submit(&state, &alice(), "second"), "CLM-2");
}

// =============================================================================
// Classify / facts / examples / status
// =============================================================================

#[test]
fn test_classify_dry_run_stores_nothing() {
    let state = memory_state();
    let req = ClassifyRequest {
        text: "Pluto is a planet".to_string(),
    };
    let data = api::classify_text(&req, &mut ScriptedRandom::always(2)).unwrap();
    assert_eq!(data.verdict, "cosmic_mystery");
    assert!(data.fallback);
    assert!(api::recent_claims(&state).unwrap().claims.is_empty());
}

#[test]
fn test_list_facts_filtering() {
    let all = api::list_facts(None).unwrap();
    assert_eq!(all.facts.len(), 12);
    assert!(all.category.is_none());

    let holes = api::list_facts(Some("black-holes")).unwrap();
    assert_eq!(holes.category.as_deref(), Some("black_holes"));
    assert_eq!(holes.facts.len(), 3);
    assert!(holes.facts.iter().all(|f| f.category == "black_holes"));

    // Blank filter means no filter
    assert_eq!(api::list_facts(Some("  ")).unwrap().facts.len(), 12);
}

#[test]
fn test_list_facts_unknown_category() {
    let err = api::list_facts(Some("comets")).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert!(err.message.contains("comets"));
}

#[test]
fn test_random_fact_follows_draw() {
    let first = api::random_fact(&mut ScriptedRandom::always(0)).unwrap();
    let all = api::list_facts(None).unwrap();
    assert_eq!(first.title, all.facts[0].title);
}

#[test]
fn test_examples_and_status() {
    assert_eq!(api::list_examples().unwrap().examples.len(), 5);

    let state = memory_state();
    let status = api::get_status(&state).unwrap();
    assert_eq!(status.rules, 7);
    assert_eq!(status.facts, 12);
    assert_eq!(status.max_claim_chars, DEFAULT_MAX_CLAIM_CHARS);
    assert_eq!(status.version, cosmic_truth::VERSION);
}

#[test]
fn test_authenticate_bearer() {
    let state = memory_state();
    assert_eq!(state.authenticate(Some("Bearer alice-token")), Some(alice()));
    assert_eq!(state.authenticate(Some("bob-token")), Some(bob()));
    assert_eq!(state.authenticate(Some("Bearer nope")), None);
    assert_eq!(state.authenticate(None), None);
}
