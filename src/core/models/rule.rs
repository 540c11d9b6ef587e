//! Classification rules
//!
//! A rule pairs a substring condition with the verdict it produces. Rules are
//! evaluated in order against lower-cased claim text and the first match wins.

use super::Verdict;

/// Substring condition over lower-cased text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Every needle must appear
    AllOf(&'static [&'static str]),
    /// At least one needle must appear
    AnyOf(&'static [&'static str]),
}

impl Condition {
    /// Test the condition against text that is already lower-cased
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::AllOf(needles) => needles.iter().all(|n| lowered.contains(n)),
            Self::AnyOf(needles) => needles.iter().any(|n| lowered.contains(n)),
        }
    }

    /// The needles this condition looks for
    #[must_use]
    pub const fn needles(&self) -> &'static [&'static str] {
        match self {
            Self::AllOf(needles) | Self::AnyOf(needles) => needles,
        }
    }
}

/// Maps a substring condition to a verdict and explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// What the text must contain
    pub condition: Condition,
    /// Verdict produced on match
    pub verdict: Verdict,
    /// Explanation produced on match
    pub explanation: &'static str,
}

impl Rule {
    /// Whether this rule fires for already lower-cased text
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.condition.matches(lowered)
    }
}
