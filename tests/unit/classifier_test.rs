//! Parameterized classifier tests using test-case

use cosmic_truth::core::models::Verdict;
use cosmic_truth::core::services::catalog::{RULES, fallback_explanation};
use cosmic_truth::core::services::{classify, matching_rule};
use test_case::test_case;

use crate::common::ScriptedRandom;

// =============================================================================
// Rule hits
// =============================================================================

#[test_case("The Earth is flat... no wait, flat earth is real", Verdict::Debunked ; "flat earth")]
#[test_case("FLAT EARTH", Verdict::Debunked ; "flat earth upper case")]
#[test_case("The Moon Landing was FAKE", Verdict::Debunked ; "moon landing fake")]
#[test_case("A black hole nearby is dangerous", Verdict::CosmicMystery ; "dangerous black hole")]
#[test_case("The sun is yellow", Verdict::Debunked ; "yellow sun")]
#[test_case("The speed of light is constant", Verdict::Verified ; "speed of light")]
#[test_case("Andromeda galaxy will hit us", Verdict::Verified ; "andromeda galaxy")]
#[test_case("Dark energy is accelerating expansion", Verdict::CosmicMystery ; "dark energy")]
#[test_case("Dark matter is everywhere", Verdict::CosmicMystery ; "dark matter")]
fn test_rule_verdicts(text: &str, expected: Verdict) {
    // Draws must not matter when a rule fires
    for draw in 0..3 {
        let result = classify(text, &mut ScriptedRandom::always(draw));
        assert_eq!(result.verdict, expected);
        assert!(!result.is_fallback());
    }
}

// =============================================================================
// Rule priority
// =============================================================================

#[test_case("dark matter binds the andromeda galaxy", 5 ; "galaxy beats dark matter")]
#[test_case("flat earth people say the moon landing was fake", 0 ; "flat earth beats moon")]
#[test_case("the sun is yellow at the speed of light", 3 ; "sun beats speed of light")]
#[test_case("is the black hole dangerous or is it dark matter", 2 ; "black hole beats dark matter")]
fn test_first_rule_wins(text: &str, expected_rule: usize) {
    assert_eq!(matching_rule(text), Some(expected_rule));
}

// =============================================================================
// Partial matches fall through
// =============================================================================

#[test_case("the moon landing happened" ; "moon landing only")]
#[test_case("this photo is fake" ; "fake only")]
#[test_case("black holes are big" ; "black hole without danger")]
#[test_case("a galaxy far away" ; "galaxy without andromeda")]
#[test_case("" ; "empty")]
#[test_case("🌌🚀✨" ; "emoji")]
fn test_no_rule_matches(text: &str) {
    assert_eq!(matching_rule(text), None);
}

#[test]
fn test_moon_landing_without_fake_reaches_later_rule() {
    let result = classify("the moon landing used dark energy", &mut ScriptedRandom::always(0));
    assert_eq!(result.rule, Some(6));
    assert_eq!(result.verdict, Verdict::CosmicMystery);
}

#[test]
fn test_substring_not_word_match() {
    // "sundays" contains "sun"
    assert_eq!(matching_rule("yellow sundays"), Some(3));
}

// =============================================================================
// Fallback
// =============================================================================

#[test_case(0, Verdict::Verified ; "draw 0")]
#[test_case(1, Verdict::Debunked ; "draw 1")]
#[test_case(2, Verdict::CosmicMystery ; "draw 2")]
fn test_fallback_draw(draw: usize, expected: Verdict) {
    let result = classify("Pluto is a planet", &mut ScriptedRandom::always(draw));
    assert!(result.is_fallback());
    assert_eq!(result.verdict, expected);
    assert_eq!(result.explanation, fallback_explanation(expected));
}

#[test]
fn test_fallback_reaches_every_verdict_with_real_rng() {
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..300 {
        seen.insert(classify("Pluto is a planet", &mut rng).verdict);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_rule_table_order() {
    let verdicts: Vec<Verdict> = RULES.iter().map(|r| r.verdict).collect();
    assert_eq!(
        verdicts,
        vec![
            Verdict::Debunked,
            Verdict::Debunked,
            Verdict::CosmicMystery,
            Verdict::Debunked,
            Verdict::Verified,
            Verdict::Verified,
            Verdict::CosmicMystery,
        ]
    );
}
