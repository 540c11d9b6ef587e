//! Property-based tests for the classifier
//!
//! Uses proptest to verify properties that should hold for all inputs.

use cosmic_truth::core::models::Verdict;
use cosmic_truth::core::services::{classify, matching_rule};
use proptest::prelude::*;

use crate::common::ScriptedRandom;

proptest! {
    /// Any text containing "flat earth" in any case is debunked
    #[test]
    fn flat_earth_always_debunked(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        upper in any::<bool>(),
        draw in 0usize..3
    ) {
        let needle = if upper { "FLAT EARTH" } else { "flat earth" };
        let text = format!("{prefix}{needle}{suffix}");
        let result = classify(&text, &mut ScriptedRandom::always(draw));
        prop_assert_eq!(result.verdict, Verdict::Debunked);
    }

    /// Classification never panics and always yields a non-empty explanation
    #[test]
    fn classify_is_total(text in ".{0,200}", draw in 0usize..10) {
        let result = classify(&text, &mut ScriptedRandom::always(draw));
        prop_assert!(!result.explanation.is_empty());
    }

    /// Text made of digits never matches a rule
    #[test]
    fn digits_never_match(text in "[0-9 ]{0,50}") {
        prop_assert_eq!(matching_rule(&text), None);
    }

    /// Case never changes which rule fires
    #[test]
    fn case_insensitive(text in "[a-zA-Z ]{0,60}") {
        prop_assert_eq!(matching_rule(&text), matching_rule(&text.to_uppercase()));
    }
}
