//! Output formatting tests

use cosmic_truth::output::{ClaimListResult, FactListResult, OutputMode, paint_verdict};
use serial_test::serial;

#[test]
#[serial]
fn test_paint_verdict_labels() {
    colored::control::set_override(false);
    assert_eq!(paint_verdict("verified").to_string(), "VERIFIED");
    assert_eq!(paint_verdict("debunked").to_string(), "DEBUNKED");
    assert_eq!(paint_verdict("cosmic_mystery").to_string(), "COSMIC MYSTERY");
    assert_eq!(paint_verdict("weird").to_string(), "WEIRD");
    colored::control::unset_override();
}

#[test]
fn test_default_mode_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_json_shapes() {
    let list = ClaimListResult { claims: Vec::new() };
    let value = serde_json::to_value(&list).unwrap();
    assert_eq!(value, serde_json::json!({ "claims": [] }));

    let facts = FactListResult {
        category: None,
        facts: Vec::new(),
    };
    let value = serde_json::to_value(&facts).unwrap();
    assert!(value.get("category").is_none());
}
