//! Verdict labels attached to classified claims

use serde::{Deserialize, Serialize};

/// Outcome of classifying a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The claim holds up
    Verified,
    /// The claim is a misconception
    Debunked,
    /// Nobody knows yet
    CosmicMystery,
}

impl Verdict {
    /// Every verdict, in fallback draw order
    pub const ALL: [Self; 3] = [Self::Verified, Self::Debunked, Self::CosmicMystery];

    /// Wire name of the verdict
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Debunked => "debunked",
            Self::CosmicMystery => "cosmic_mystery",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verified" => Ok(Self::Verified),
            "debunked" => Ok(Self::Debunked),
            "cosmic_mystery" | "cosmic-mystery" => Ok(Self::CosmicMystery),
            _ => Err(format!(
                "Invalid verdict: {s}. Use: verified, debunked, cosmic_mystery"
            )),
        }
    }
}
