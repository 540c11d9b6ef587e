//! Claim classifier - maps claim text to a verdict
//!
//! Pure logic: lower-case the text, walk [`RULES`] in order and return the
//! first match. Text that matches nothing gets a verdict drawn uniformly from
//! [`Verdict::ALL`] together with that verdict's generic explanation.

use serde::Serialize;

use super::super::models::Verdict;
use super::super::ports::{RandomSource, choose};
use super::catalog::{RULES, fallback_explanation};

/// Result of classifying one claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Outcome label
    pub verdict: Verdict,
    /// Why the verdict was reached
    pub explanation: &'static str,
    /// Index into [`RULES`] of the rule that fired, `None` for the random fallback
    pub rule: Option<usize>,
}

impl Classification {
    /// Whether the verdict came from the random fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.rule.is_none()
    }
}

/// Find the first rule matching `text`, if any
///
/// Deterministic; useful when the caller only wants to know whether a rule
/// applies.
#[must_use]
pub fn matching_rule(text: &str) -> Option<usize> {
    let lowered = text.to_lowercase();
    RULES.iter().position(|rule| rule.matches(&lowered))
}

/// Classify a claim
///
/// Never fails: empty or unrecognised text falls through to the random branch.
pub fn classify(text: &str, rng: &mut dyn RandomSource) -> Classification {
    if let Some(index) = matching_rule(text) {
        let rule = &RULES[index];
        return Classification {
            verdict: rule.verdict,
            explanation: rule.explanation,
            rule: Some(index),
        };
    }

    let verdict = choose(rng, &Verdict::ALL).copied().unwrap_or(Verdict::CosmicMystery);
    Classification {
        verdict,
        explanation: fallback_explanation(verdict),
        rule: None,
    }
}
